// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use tokio::fs;

use super::io_error;
use crate::error::BuildResult;

/// Counters returned by [`copy_dir_contents_async`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Recursively copies everything inside `src` into `dst`.
///
/// `dst` is created if needed. Existing files in `dst` are overwritten.
///
/// # Example
/// ```no_run
/// use scp_build::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_dir_contents_async(Path::new("build/libs"), Path::new(".out/deliverables/java")).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns `FsError::IoError` if creating, reading or copying fails.
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> BuildResult<CopyStats> {
    let mut stats = CopyStats::default();
    copy_into(src, dst, &mut stats).await?;
    Ok(stats)
}

async fn copy_into(src: &Path, dst: &Path, stats: &mut CopyStats) -> BuildResult<()> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| io_error(dst, e))?;

    let mut entries = fs::read_dir(src).await.map_err(|e| io_error(src, e))?;

    while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(src, e))? {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry.file_type().await.map_err(|e| io_error(&src_path, e))?;

        if file_type.is_dir() {
            stats.dirs += 1;
            Box::pin(copy_into(&src_path, &dst_path, stats)).await?;
        } else {
            fs::copy(&src_path, &dst_path)
                .await
                .map_err(|e| io_error(&src_path, e))?;
            stats.files += 1;
        }
    }

    Ok(())
}
