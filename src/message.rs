//! Message body loading.
//!
//! The whole file becomes the literal message body. Nothing is trimmed or
//! substituted.

use crate::error::{LoadError, LoadResult};
use std::path::Path;

/// Read the message body from `path`.
///
/// # Errors
///
/// Returns `LoadError::SourceUnreadable` if the file cannot be read or is not
/// valid UTF-8.
pub fn load_message(path: impl AsRef<Path>) -> LoadResult<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| LoadError::SourceUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
