//! Input resolution: validate the user-supplied path before any work.
//!
//! Only existence is checked here. Permission problems, directories and
//! other unreadable paths surface from the encode stage as
//! [`SummarizeError::ReadFailed`], so the two messages stay distinct.

use crate::error::SummarizeError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a local file path, failing fast when nothing exists there.
pub fn resolve_local(path: impl AsRef<Path>) -> Result<PathBuf, SummarizeError> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(SummarizeError::FileNotFound { path });
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}
