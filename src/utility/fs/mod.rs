// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async filesystem helpers built on `tokio::fs`.
//!
//! ```text
//! remove:  remove_dir_if_exists()     rm -rf, missing is fine
//! copy:    copy_dir_contents_async()  recursive, returns CopyStats
//! ```

pub mod copy;
pub mod remove;

#[cfg(test)]
mod tests;

use crate::error::FsError;
use std::path::Path;

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> FsError {
    FsError::IoError {
        path: path.display().to_string(),
        source,
    }
}
