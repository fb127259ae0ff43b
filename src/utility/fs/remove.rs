// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use super::io_error;
use crate::error::BuildResult;

/// Removes `path` recursively, like `rm -rf`.
///
/// Returns `false` when there was nothing to remove. A plain file at `path`
/// is removed too.
///
/// # Errors
///
/// Returns `FsError::IoError` if the path exists but cannot be removed.
pub async fn remove_dir_if_exists(path: &Path) -> BuildResult<bool> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(io_error(path, e).into()),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error(path, e).into()),
    }
}
