// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions for step execution.
//!
//! ```text
//! Step --> ToolContext --> Tool --> ProcessBuilder
//!                           |
//!                         gradle
//! ```

use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::config::paths::ProjectPaths;
use crate::error::Result;

pub mod gradle;

/// Shared state handed to every step and tool.
#[derive(Debug, Clone)]
pub struct ToolContext {
    config: Arc<Config>,
    paths: ProjectPaths,
    dry_run: bool,
}

impl ToolContext {
    /// Creates a context; `paths` is resolved from `config` by the caller.
    #[must_use]
    pub const fn new(config: Arc<Config>, paths: ProjectPaths, dry_run: bool) -> Self {
        Self {
            config,
            paths,
            dry_run,
        }
    }

    /// Creates a context for `config`, resolving its path set.
    ///
    /// # Errors
    ///
    /// Returns an error if `paths.project_root` is unset.
    pub fn from_config(config: Config) -> Result<Self> {
        let paths = config.project_paths()?;
        let dry_run = config.global.dry;
        Ok(Self::new(Arc::new(config), paths, dry_run))
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// When true, tools log what they would do and change nothing.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// An external operation run on behalf of a step.
pub trait Tool: Send + Sync {
    /// Short name used in logs (e.g. "gradle").
    fn name(&self) -> &str;

    /// Runs the operation to completion.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}
