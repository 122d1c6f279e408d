use chrono::{DateTime, Utc};

use crate::environment::types::AppState;

use super::state::{State, TempImage};

/// `currentUser.gravatarStatus`, if the whole path has been initialized
fn gravatar_status(state: Option<&AppState>) -> Option<&State> {
    state?.current_user.as_ref()?.gravatar_status.as_ref()
}

fn temp_image(state: Option<&AppState>) -> Option<&TempImage> {
    gravatar_status(state)?.temp_image.as_ref()
}

pub fn is_current_user_uploading_gravatar(state: Option<&AppState>) -> bool {
    gravatar_status(state).map_or(false, State::is_uploading)
}

pub fn current_user_temp_image(state: Option<&AppState>) -> Option<&str> {
    temp_image(state).map(|image| image.src.as_str())
}

pub fn current_user_temp_image_expiration(state: Option<&AppState>) -> Option<i64> {
    temp_image(state).map(|image| image.expiration)
}

/// The temporary image, unless it already expired at `now`
pub fn current_user_fresh_temp_image(
    state: Option<&AppState>,
    now: DateTime<Utc>,
) -> Option<&TempImage> {
    temp_image(state).filter(|image| !image.is_expired(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::gravatar_status::{RequestToken, UploadStatus};
    use crate::environment::types::CurrentUser;
    use chrono::TimeZone;

    fn app_state(status: State) -> AppState {
        AppState {
            current_user: Some(CurrentUser {
                id: Some(1),
                gravatar_status: Some(status),
            }),
        }
    }

    #[test]
    fn uploading_is_false_when_state_is_missing() {
        assert!(!is_current_user_uploading_gravatar(None));
        assert!(!is_current_user_uploading_gravatar(Some(&AppState::default())));

        let no_status = AppState {
            current_user: Some(CurrentUser::default()),
        };
        assert!(!is_current_user_uploading_gravatar(Some(&no_status)));
    }

    #[test]
    fn uploading_reads_state_when_defined() {
        let uploading = app_state(State {
            upload: UploadStatus::Uploading(RequestToken::new(1)),
            temp_image: None,
        });
        assert!(is_current_user_uploading_gravatar(Some(&uploading)));

        let not_uploading = app_state(State::default());
        assert!(!is_current_user_uploading_gravatar(Some(&not_uploading)));
    }

    #[test]
    fn temp_image_missing() {
        assert_eq!(current_user_temp_image(None), None);
        assert_eq!(current_user_temp_image_expiration(None), None);

        let empty = app_state(State::default());
        assert_eq!(current_user_temp_image(Some(&empty)), None);
        assert_eq!(current_user_temp_image_expiration(Some(&empty)), None);
    }

    #[test]
    fn temp_image_present() {
        let state = app_state(State {
            upload: UploadStatus::Idle,
            temp_image: Some(TempImage::new("image", 123)),
        });
        assert_eq!(current_user_temp_image(Some(&state)), Some("image"));
        assert_eq!(current_user_temp_image_expiration(Some(&state)), Some(123));
    }

    #[test]
    fn fresh_temp_image_respects_expiration() {
        let state = app_state(State {
            upload: UploadStatus::Idle,
            temp_image: Some(TempImage::new("image", 5_000)),
        });
        let before = Utc.timestamp_millis_opt(4_999).unwrap();
        let after = Utc.timestamp_millis_opt(5_000).unwrap();
        assert_eq!(
            current_user_fresh_temp_image(Some(&state), before).map(|i| i.src.as_str()),
            Some("image")
        );
        assert_eq!(current_user_fresh_temp_image(Some(&state), after), None);
    }
}
