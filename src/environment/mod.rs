pub mod config;
pub mod migrations;
pub mod repository;
pub mod storage;
pub mod types;

pub use config::Config;
pub use repository::Repository;
pub use storage::{ReceivedImage, Store};
pub use types::{AppAction, AppState, CurrentUser};
