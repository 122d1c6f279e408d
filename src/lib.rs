mod components;
mod environment;
mod error;
mod logging;
mod reducer;

pub use components::gravatar_status::{
    self, current_user_fresh_temp_image, current_user_temp_image,
    current_user_temp_image_expiration, is_current_user_uploading_gravatar, is_uploading,
    temp_image, GravatarAction,
    GravatarStatusReducer, RequestToken, TempImage, UploadStatus,
};
pub use environment::config::DATA_DIR_ENV;
pub use environment::migrations::CURRENT_VERSION;
pub use environment::{
    AppAction, AppState, Config, CurrentUser, ReceivedImage, Repository, Store,
};
pub use error::{Result, StorageError};
pub use logging::init_logging;
pub use reducer::Reducer;
