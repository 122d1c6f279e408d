use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::action::{GravatarAction, RequestToken};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading(RequestToken),
}

impl UploadStatus {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadStatus::Uploading(_))
    }

    pub fn token(&self) -> Option<RequestToken> {
        match self {
            UploadStatus::Idle => None,
            UploadStatus::Uploading(token) => Some(*token),
        }
    }
}

/// A freshly uploaded image that has not been committed as the gravatar yet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TempImage {
    pub src: String,
    /// Milliseconds since the unix epoch
    pub expiration: i64,
}

impl TempImage {
    pub fn new(src: impl Into<String>, expiration: i64) -> Self {
        Self {
            src: src.into(),
            expiration,
        }
    }

    /// `None` if `now + lifetime` is outside the representable date range
    pub fn with_lifetime(
        src: impl Into<String>,
        lifetime: Duration,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let expires = now.checked_add_signed(lifetime)?;
        Some(Self::new(src, expires.timestamp_millis()))
    }

    /// Validate a record read back from storage. Anything that is not an
    /// object with a string `src` and a numeric `expiration` is rejected.
    pub fn from_persisted(value: &Value) -> Option<TempImage> {
        let object = value.as_object()?;
        let src = object.get("src")?.as_str()?;
        let expiration = object.get("expiration")?;
        let expiration = match expiration.as_i64() {
            Some(millis) => millis,
            None => {
                let float = expiration.as_f64()?;
                if !float.is_finite() || float.abs() >= i64::MAX as f64 {
                    return None;
                }
                float.trunc() as i64
            }
        };
        Some(TempImage::new(src, expiration))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.expiration).single()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(at) => at <= now,
            None => true,
        }
    }
}

/// The `{ isUploading, tempImage }` slice
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct State {
    pub upload: UploadStatus,
    pub temp_image: Option<TempImage>,
}

impl State {
    pub fn is_uploading(&self) -> bool {
        self.upload.is_uploading()
    }

    /// Rebuild the slice from its persisted form
    pub fn from_persisted(value: &Value) -> Self {
        let mut state = State::default();
        super::reducer::reduce(&GravatarAction::Deserialize(value.clone()), &mut state);
        state
    }
}

/// Writes the persisted layout. The `Serialize` boundary runs on a copy first
/// so an in-flight upload is never written out.
impl Serialize for State {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut persisted = self.clone();
        super::reducer::reduce(&GravatarAction::Serialize, &mut persisted);

        let mut s = serializer.serialize_struct("GravatarStatus", 2)?;
        s.serialize_field("isUploading", &persisted.is_uploading())?;
        s.serialize_field("tempImage", &PersistedTempImage(&persisted.temp_image))?;
        s.end()
    }
}

/// A missing image is written as an empty object
struct PersistedTempImage<'a>(&'a Option<TempImage>);

impl Serialize for PersistedTempImage<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(image) => image.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
