// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! scp-build [global options] -c {lib|doc} [-cb]
//! ```
//!
//! `-cb` is not a valid clap short flag (it would read as `-c b`), so it is
//! rewritten to `--clean-build` before parsing.

pub mod build;
pub mod global;


use std::ffi::OsString;

use crate::cli::build::BuildArgs;
use crate::cli::global::GlobalOptions;
use clap::Parser;

/// OpenSCP Java library build orchestrator
///
/// Builds the OpenSCP Java library or its documentation with Gradle and
/// collects the results under `.out/deliverables/java`.
#[derive(Debug, Parser)]
#[command(
    name = "scp-build",
    author,
    version,
    about = "OpenSCP Java library build orchestrator",
    long_about = "scp-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds the OpenSCP Java library (`-c lib`) or its Javadoc\n\
                  (`-c doc`) through the project's Gradle wrapper and copies\n\
                  the results into .out/deliverables/java.",
    after_help = "CONFIG FILES:\n\n\
                  scp-build loads `scp-build.toml` from the project root if it\n\
                  exists, then every file given with --config, then SCP_BUILD_*\n\
                  environment variables (e.g. SCP_BUILD_GRADLE__CONSOLE=verbose),\n\
                  then --set overrides. Later sources win."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// What to build
    #[command(flatten)]
    pub build: BuildArgs,
}

/// Rewrites the legacy `-cb` spelling to `--clean-build`.
///
/// Only whole arguments are rewritten, and nothing after `--`.
pub fn normalize_args<I, T>(iter: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    iter.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                arg
            } else if arg == "-cb" {
                OsString::from("--clean-build")
            } else {
                arg
            }
        })
        .collect()
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse_from(normalize_args(std::env::args_os()))
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::parse_from(normalize_args(iter))
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_args(iter))
}
