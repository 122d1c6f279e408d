mod action;
mod reducer;
mod selectors;
mod state;

pub use action::{GravatarAction, RequestToken};
pub use state::{State, TempImage, UploadStatus};

pub use reducer::{is_uploading, reduce, temp_image};
pub use selectors::{
    current_user_fresh_temp_image, current_user_temp_image, current_user_temp_image_expiration,
    is_current_user_uploading_gravatar,
};

pub struct GravatarStatusReducer;
use crate::reducer::Reducer;

impl Reducer for GravatarStatusReducer {
    type Action = action::GravatarAction;

    type State = state::State;

    fn reduce(action: &Self::Action, state: &mut Self::State) {
        reducer::reduce(action, state)
    }
}
