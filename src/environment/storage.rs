use crate::components::gravatar_status::{GravatarAction, RequestToken};
use crate::error::Result;

use super::migrations;
use super::repository::Repository;
use super::types::{AppAction, AppState};

/// A temporary image handed back by a finished upload
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReceivedImage {
    pub src: String,
    /// Milliseconds since the unix epoch
    pub expiration: i64,
}

/// Owns the application state. Actions are applied one at a time, each to
/// completion, in the order they are dispatched.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    repository: Option<Repository>,
    last_token: Option<RequestToken>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(repository: Repository) -> Self {
        Self {
            repository: Some(repository),
            ..Default::default()
        }
    }

    /// Restore the state persisted in `repository`. A missing, unreadable or
    /// incompatible file yields the default state.
    pub fn load(repository: Repository) -> Self {
        let value = match repository.read() {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                log::debug!("no persisted state at {}", repository.path().display());
                None
            }
            Err(e) => {
                log::error!("Could not read state: {e}");
                None
            }
        };
        let mut store = Self::with_repository(repository);
        let Some(value) = value else {
            return store;
        };
        match migrations::migrate(value) {
            Ok(value) => store.dispatch(AppAction::Deserialize(value)),
            Err(e) => log::warn!("Discarding persisted state: {e}"),
        }
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn repository(&self) -> Option<&Repository> {
        self.repository.as_ref()
    }

    pub fn dispatch(&mut self, action: AppAction) {
        self.state.reduce(action);
    }

    pub fn dispatch_gravatar(&mut self, action: GravatarAction) {
        self.dispatch(AppAction::Gravatar(action));
    }

    /// Start tracking a new upload and return the token its completion
    /// has to carry.
    pub fn begin_upload(&mut self) -> RequestToken {
        let token = match self.last_token {
            Some(last) => last.next(),
            None => RequestToken::new(1),
        };
        self.last_token = Some(token);
        self.dispatch_gravatar(GravatarAction::UploadRequest(token));
        token
    }

    /// Apply the outcome of the upload started with `token`. Results of an
    /// upload that was superseded by a newer one are dropped.
    pub fn complete_upload(
        &mut self,
        token: RequestToken,
        result: std::result::Result<ReceivedImage, String>,
    ) {
        if self.last_token.map_or(false, |last| token < last) {
            log::debug!("dropping result of superseded upload {}", token.value());
            return;
        }
        match result {
            Ok(image) => {
                self.dispatch_gravatar(GravatarAction::UploadRequestSuccess(token));
                self.dispatch_gravatar(GravatarAction::UploadReceive {
                    src: image.src,
                    expiration: image.expiration,
                });
            }
            Err(e) => {
                log::error!("Gravatar upload {} failed: {e}", token.value());
                self.dispatch_gravatar(GravatarAction::UploadRequestFailure(token));
            }
        }
    }

    pub fn remove_temp_image(&mut self) {
        self.dispatch_gravatar(GravatarAction::RemoveTemporary);
    }

    /// Write the state through the persist boundary. Without a repository
    /// this does nothing.
    pub fn save(&self) -> Result<()> {
        let Some(repository) = self.repository.as_ref() else {
            return Ok(());
        };
        let persisted = migrations::tag(self.state.to_persisted()?);
        repository.write(&persisted)
    }
}
