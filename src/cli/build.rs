// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build arguments.
//!
//! ```text
//! -c, --component {lib|doc}   what to build (required)
//! -cb, --clean-build          run `gradle clean` before `build` (lib only)
//! ```

use clap::{ArgAction, Args};

use crate::task::{Component, Task};

/// Arguments selecting what to build.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Component to build.
    #[arg(short = 'c', long = "component", value_name = "COMPONENT", value_enum)]
    pub component: Component,

    /// Runs `gradle clean` before building the library (also accepted as -cb).
    #[arg(long = "clean-build", action = ArgAction::SetTrue)]
    pub clean_build: bool,
}

impl BuildArgs {
    /// Task selected by these arguments.
    #[must_use]
    pub const fn task(&self) -> Task {
        Task::new(self.component, self.clean_build)
    }
}
