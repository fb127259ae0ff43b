// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gradle tool.
//!
//! ```text
//! GradleTool
//! Actions: Clean | Build | Javadoc
//! Command: <wrapper> --console=<mode> -p <project_root> [args...] :<action>
//! Wrapper: gradle.wrapper > <project_root>/gradlew > `gradle` in PATH
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use futures_util::future::BoxFuture;
use tracing::{debug, info};

use super::{Tool, ToolContext};
use crate::config::types::ConsoleMode;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{ProcessError, Result};

#[cfg(windows)]
const DEFAULT_WRAPPER: &str = "gradlew.bat";
#[cfg(not(windows))]
const DEFAULT_WRAPPER: &str = "gradlew";

/// Gradle task invoked at the root project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradleAction {
    Clean,
    Build,
    Javadoc,
}

impl GradleAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Build => "build",
            Self::Javadoc => "javadoc",
        }
    }

    /// Task path argument, e.g. `:build`.
    #[must_use]
    pub fn task_path(self) -> String {
        format!(":{}", self.as_str())
    }
}

impl std::fmt::Display for GradleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs one Gradle action against the project root.
#[derive(Debug, Clone)]
pub struct GradleTool {
    project_dir: PathBuf,
    wrapper: Option<PathBuf>,
    console: ConsoleMode,
    extra_args: Vec<String>,
    action: GradleAction,
}

impl GradleTool {
    #[must_use]
    pub fn new(project_dir: impl AsRef<Path>, action: GradleAction) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
            wrapper: None,
            console: ConsoleMode::default(),
            extra_args: Vec::new(),
            action,
        }
    }

    /// Tool for `action` using the `[gradle]` settings and project root in `ctx`.
    #[must_use]
    pub fn from_context(ctx: &ToolContext, action: GradleAction) -> Self {
        let gradle = &ctx.config().gradle;
        let mut tool = Self::new(&ctx.paths().project_root, action)
            .console(gradle.console)
            .extra_args(gradle.args.iter().cloned());
        if let Some(ref wrapper) = gradle.wrapper {
            tool = tool.wrapper(wrapper);
        }
        tool
    }

    #[must_use]
    pub fn wrapper(mut self, path: impl AsRef<Path>) -> Self {
        self.wrapper = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub const fn console(mut self, console: ConsoleMode) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn action(&self) -> GradleAction {
        self.action
    }

    /// Wrapper location, configured or default, without checking it exists.
    fn wrapper_path(&self) -> PathBuf {
        let wrapper = self
            .wrapper
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WRAPPER));
        if wrapper.is_relative() {
            self.project_dir.join(wrapper)
        } else {
            wrapper
        }
    }

    /// Executable to spawn.
    ///
    /// An explicitly configured wrapper must exist. Otherwise the project's
    /// own wrapper is preferred over a `gradle` found in `PATH`.
    fn executable(&self) -> std::result::Result<PathBuf, ProcessError> {
        let wrapper = self.wrapper_path();
        if wrapper.is_file() {
            return Ok(wrapper);
        }
        if self.wrapper.is_some() {
            return Err(ProcessError::ExecutableNotFound {
                name: wrapper.display().to_string(),
            });
        }
        ProcessBuilder::find("gradle").ok_or_else(|| ProcessError::ExecutableNotFound {
            name: format!("{} (or `gradle` in PATH)", wrapper.display()),
        })
    }

    fn command(&self, program: &Path) -> ProcessBuilder {
        let builder = ProcessBuilder::new(program)
            .name("gradle")
            .cwd(&self.project_dir)
            .arg(format!("--console={}", self.console))
            .arg("-p")
            .arg(&self.project_dir)
            .args(&self.extra_args)
            .arg(self.action.task_path());

        // rich/auto consoles draw progress bars and need the real terminal
        match self.console {
            ConsoleMode::Rich | ConsoleMode::Auto => builder.inherit_stdio(),
            ConsoleMode::Plain | ConsoleMode::Verbose => builder,
        }
    }

    async fn do_run(&self, ctx: &ToolContext) -> Result<()> {
        if ctx.is_dry_run() {
            let command = self.command(&self.wrapper_path());
            info!(
                action = %self.action,
                "[dry-run] Would run `{}`",
                command.command_line()
            );
            return Ok(());
        }

        let program = self.executable()?;
        debug!(program = %program.display(), action = %self.action, "Running Gradle");

        self.command(&program)
            .run()
            .await
            .with_context(|| format!("Gradle '{}' failed", self.action))?;

        info!(action = %self.action, "Gradle completed successfully");
        Ok(())
    }
}

impl Tool for GradleTool {
    fn name(&self) -> &str {
        "gradle"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_run(ctx))
    }
}
