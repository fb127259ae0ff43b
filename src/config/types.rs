// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! [global]  dry, output_log_level, file_log_level, log_file
//! [gradle]  wrapper, console (plain|auto|rich|verbose), args
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// `[global]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log every step without deleting, spawning or copying anything.
    pub dry: bool,
    /// Console log level (0-5).
    pub output_log_level: LogLevel,
    /// File log level; falls back to `output_log_level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_log_level: Option<LogLevel>,
    /// Log file path. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Value passed to Gradle's `--console` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleMode {
    #[default]
    Plain,
    Auto,
    Rich,
    Verbose,
}

impl ConsoleMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Auto => "auto",
            Self::Rich => "rich",
            Self::Verbose => "verbose",
        }
    }
}

impl std::fmt::Display for ConsoleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[gradle]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradleConfig {
    /// Wrapper script, relative to the project root unless absolute.
    /// Defaults to `gradlew` (`gradlew.bat` on Windows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<PathBuf>,
    /// Console mode for Gradle output.
    pub console: ConsoleMode,
    /// Extra arguments inserted before the task name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}
