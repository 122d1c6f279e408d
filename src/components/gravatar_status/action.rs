use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies one upload attempt. Tokens are handed out in increasing order,
/// so a completion carrying an older token than the one in flight belongs to
/// an abandoned request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Debug, PartialEq, strum_macros::IntoStaticStr)]
pub enum GravatarAction {
    UploadRequest(RequestToken),
    UploadRequestSuccess(RequestToken),
    UploadRequestFailure(RequestToken),
    UploadReceive {
        src: String,
        /// Milliseconds since the unix epoch
        expiration: i64,
    },
    RemoveTemporary,
    /// The state is about to be written to storage
    Serialize,
    /// The raw slice as it was read back from storage
    Deserialize(Value),
}

impl GravatarAction {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
