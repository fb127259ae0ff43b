// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! A single entry of a build plan.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{BuildError, FsError, Result};
use crate::task::tools::gradle::{GradleAction, GradleTool};
use crate::task::tools::{Tool, ToolContext};
use crate::utility::fs::copy::copy_dir_contents_async;
use crate::utility::fs::remove::remove_dir_if_exists;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Delete a directory tree; a missing directory is not an error.
    RemoveDir(PathBuf),
    /// Run one Gradle action at the project root.
    Gradle(GradleAction),
    /// Copy everything below `source` into `destination`.
    Collect {
        source: PathBuf,
        destination: PathBuf,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveDir(path) => write!(f, "remove {}", path.display()),
            Self::Gradle(action) => write!(f, "gradle {}", action.task_path()),
            Self::Collect {
                source,
                destination,
            } => write!(f, "collect {} -> {}", source.display(), destination.display()),
        }
    }
}

impl Step {
    /// Executes the step, or logs it when `ctx` is a dry run.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or Gradle failure.
    pub async fn run(&self, ctx: &ToolContext) -> Result<()> {
        match self {
            Self::RemoveDir(path) => {
                if ctx.is_dry_run() {
                    info!("[dry-run] Would remove {}", path.display());
                    return Ok(());
                }
                if remove_dir_if_exists(path).await? {
                    info!(path = %path.display(), "removed");
                }
                Ok(())
            }
            Self::Gradle(action) => {
                let tool = GradleTool::from_context(ctx, *action);
                info!(tool = tool.name(), action = %tool.action(), "running");
                tool.run(ctx).await
            }
            Self::Collect {
                source,
                destination,
            } => collect(source, destination, ctx).await,
        }
    }
}

async fn collect(source: &Path, destination: &Path, ctx: &ToolContext) -> Result<()> {
    if ctx.is_dry_run() {
        info!(
            "[dry-run] Would copy {} into {}",
            source.display(),
            destination.display()
        );
        return Ok(());
    }

    if !source.is_dir() {
        return Err(BuildError::from(FsError::NotFound(source.display().to_string())).into());
    }

    let stats = copy_dir_contents_async(source, destination).await?;
    if stats.files == 0 {
        warn!(source = %source.display(), "no artifacts to collect");
    } else {
        info!(
            files = stats.files,
            destination = %destination.display(),
            "artifacts collected"
        );
    }
    Ok(())
}
