use super::action::GravatarAction;
use super::state::{State, TempImage, UploadStatus};

pub fn reduce(action: &GravatarAction, state: &mut State) {
    log::trace!("{}", action.name());
    state.upload = is_uploading(Some(state.upload), action);
    state.temp_image = temp_image(state.temp_image.take(), action);
}

/// Tracks whether an upload request is in flight. A loading state never
/// survives the persist boundary: a request can't be resumed after a reload.
pub fn is_uploading(previous: Option<UploadStatus>, action: &GravatarAction) -> UploadStatus {
    let previous = previous.unwrap_or_default();
    match action {
        GravatarAction::UploadRequest(token) => UploadStatus::Uploading(*token),
        GravatarAction::UploadRequestSuccess(token)
        | GravatarAction::UploadRequestFailure(token) => match previous {
            UploadStatus::Uploading(current) if *token < current => {
                log::debug!(
                    "ignoring stale completion of upload {} while {} is in flight",
                    token.value(),
                    current.value()
                );
                previous
            }
            _ => UploadStatus::Idle,
        },
        GravatarAction::Serialize | GravatarAction::Deserialize(_) => UploadStatus::Idle,
        _ => previous,
    }
}

pub fn temp_image(previous: Option<TempImage>, action: &GravatarAction) -> Option<TempImage> {
    match action {
        GravatarAction::UploadReceive { src, expiration } => {
            Some(TempImage::new(src.clone(), *expiration))
        }
        GravatarAction::RemoveTemporary => None,
        GravatarAction::Deserialize(persisted) => {
            let raw = persisted.get("tempImage")?;
            let image = TempImage::from_persisted(raw);
            let is_empty_record = raw.as_object().map_or(false, |o| o.is_empty());
            if image.is_none() && !is_empty_record {
                log::warn!("discarding persisted temporary image with invalid schema: {raw}");
            }
            image
        }
        _ => previous,
    }
}
