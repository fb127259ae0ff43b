// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("gradlew")
//!   .args() .cwd() .name() [.inherit_stdio()]
//!   .run()
//!       --> tokio::process::Command
//!           stdout/stderr line readers --> log
//!       --> Ok(()) | ProcessError
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
