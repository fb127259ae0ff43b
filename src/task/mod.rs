// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build tasks.
//!
//! # Architecture
//!
//! ```text
//! Component (lib | doc) + --clean-build
//!        |
//!        v
//!      Task ----plan(&ProjectPaths)----> [Step, Step, ...]
//!        |                                  |
//!        v                                  v
//!   run(&ToolContext)  ----------->  Step::run, in order
//!                                   RemoveDir | Gradle | Collect
//! ```
//!
//! # Plans
//!
//! | Task | Steps |
//! |------|-------|
//! | `Library` | remove libs, docs, deliverables/java; `clean` (if requested); `build`; collect libs |
//! | `Documentation` | remove deliverables/java/docs; `javadoc`; collect docs into deliverables/java |
//!
//! Steps run strictly one after another. The first failure aborts the task.

pub mod step;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_utils;

use anyhow::Context;
use tracing::info;

use crate::config::paths::ProjectPaths;
use crate::error::Result;
use crate::task::step::Step;
use crate::task::tools::ToolContext;
use crate::task::tools::gradle::GradleAction;

/// Build target selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Component {
    /// Java SCP library
    Lib,
    /// Java SCP library documentation
    Doc,
}

impl Component {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::Doc => "doc",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One build per invocation, derived from the selected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Library { clean_build: bool },
    Documentation,
}

impl Task {
    /// Task for `component`. The clean-build flag only affects the library.
    #[must_use]
    pub const fn new(component: Component, clean_build: bool) -> Self {
        match component {
            Component::Lib => Self::Library { clean_build },
            Component::Doc => Self::Documentation,
        }
    }

    #[must_use]
    pub const fn component(&self) -> Component {
        match self {
            Self::Library { .. } => Component::Lib,
            Self::Documentation => Component::Doc,
        }
    }

    /// Ordered steps for this task.
    #[must_use]
    pub fn plan(&self, paths: &ProjectPaths) -> Vec<Step> {
        match *self {
            Self::Library { clean_build } => {
                let mut steps = vec![
                    Step::RemoveDir(paths.libs_dir.clone()),
                    Step::RemoveDir(paths.docs_dir.clone()),
                    Step::RemoveDir(paths.deliverables_java_dir.clone()),
                ];
                if clean_build {
                    steps.push(Step::Gradle(GradleAction::Clean));
                }
                steps.push(Step::Gradle(GradleAction::Build));
                steps.push(Step::Collect {
                    source: paths.libs_dir.clone(),
                    destination: paths.deliverables_java_dir.clone(),
                });
                steps
            }
            Self::Documentation => vec![
                Step::RemoveDir(paths.deliverables_docs_dir.clone()),
                Step::Gradle(GradleAction::Javadoc),
                // javadoc/ lands next to the jars
                Step::Collect {
                    source: paths.docs_dir.clone(),
                    destination: paths.deliverables_java_dir.clone(),
                },
            ],
        }
    }

    /// Runs every step of the plan in order.
    ///
    /// # Errors
    ///
    /// Returns the first step failure, annotated with the step that failed.
    pub async fn run(&self, ctx: &ToolContext) -> Result<()> {
        let component = self.component();
        let steps = self.plan(ctx.paths());
        let total = steps.len();

        info!(component = %component, steps = total, dry_run = ctx.is_dry_run(), "Starting build");

        for (index, step) in steps.iter().enumerate() {
            info!(component = %component, "[{}/{total}] {step}", index + 1);
            step.run(ctx)
                .await
                .with_context(|| format!("'{component}' build failed at step '{step}'"))?;
        }

        info!(component = %component, "Build completed successfully");
        Ok(())
    }
}
