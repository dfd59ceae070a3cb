//! RFC 6902 partial updates over an entity's input document.
use json_patch::Patch;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ServiceError;

/// Serialize `current`, apply `patch`, and read the result back.
///
/// Unknown members introduced by the patch are rejected when the input type
/// denies them. Nothing is persisted here.
pub fn apply_patch<T>(current: &T, patch: &Patch) -> Result<T, ServiceError>
where
    T: Serialize + DeserializeOwned,
{
    let mut doc = serde_json::to_value(current)
        .map_err(|e| ServiceError::BadArgument(format!("Could not build the patch target: {}", e)))?;
    json_patch::patch(&mut doc, &patch.0)
        .map_err(|e| ServiceError::BadArgument(format!("The patch could not be applied: {}", e)))?;
    serde_json::from_value(doc).map_err(|e| ServiceError::BadArgument(format!("The patched document is invalid: {}", e)))
}
