//! Versioned persisted blobs.
//!
//! Every blob written carries a `version` key. Blobs without one predate
//! versioning and are treated as version 0.

use serde_json::Value;

use crate::error::{Result, StorageError};

pub const VERSION_KEY: &str = "version";

/// Bump this and add a step to `migrate` whenever the persisted layout changes.
pub const CURRENT_VERSION: u64 = 1;

/// Bring a persisted blob up to `CURRENT_VERSION`
pub fn migrate(mut value: Value) -> Result<Value> {
    let Some(object) = value.as_object() else {
        return Err(StorageError::Migration(
            "persisted state is not an object".to_string(),
        ));
    };
    let version = match object.get(VERSION_KEY) {
        None => 0,
        Some(v) => v
            .as_u64()
            .ok_or_else(|| StorageError::Migration(format!("invalid version tag {v}")))?,
    };

    log::debug!("persisted state version {version}, current version {CURRENT_VERSION}");

    if version > CURRENT_VERSION {
        return Err(StorageError::Migration(format!(
            "persisted state version {version} is newer than {CURRENT_VERSION}"
        )));
    }

    if version < 1 {
        log::debug!("applying migration v001_version_tag");
        value = v001_version_tag(value);
    }

    Ok(value)
}

/// Attach the current version to a blob before it's written
pub fn tag(mut value: Value) -> Value {
    if let Some(object) = value.as_object_mut() {
        object.insert(VERSION_KEY.to_string(), Value::from(CURRENT_VERSION));
    }
    value
}

/// Untagged blobs have the same layout as version 1
fn v001_version_tag(mut value: Value) -> Value {
    if let Some(object) = value.as_object_mut() {
        object.insert(VERSION_KEY.to_string(), Value::from(1u64));
    }
    value
}
