// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --project-root DIR ← paths.project_root override
//! --config FILE      ← Additional config files (can repeat)
//! --dry              ← Log the plan, touch nothing
//! --log-level N      ← Console verbosity (0-5)
//! --file-log-level   ← File verbosity (defaults to --log-level)
//! --log-file FILE    ← Also log to FILE
//! --set KEY=VAL      ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --config > scp-build.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Options shared by every invocation.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Root of the Gradle project. Defaults to the nearest ancestor
    /// containing gradlew or settings.gradle(.kts), else the current directory.
    #[arg(short = 'p', long = "project-root", value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Logs every step without running Gradle or touching the filesystem.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'gradle/console=verbose' or 'paths.out_dir=dist'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` entries come first so dedicated flags win over them.
    /// `--project-root` is handled by the loader, since it also decides
    /// where `scp-build.toml` is looked up.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global/output_log_level={level}"));
        }

        if let Some(level) = self.file_log_level {
            overrides.push(format!("global/file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global/log_file={}", path.display()));
        }

        if self.dry {
            overrides.push("global/dry=true".to_string());
        }

        overrides
    }
}
