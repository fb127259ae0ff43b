// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          BuildError (16 bytes)
//!                 |
//!       +---------+---------+
//!       |         |         |
//!       v         v         v
//!    Config    Process      Fs
//!     Box        Box       Box
//!
//! Sub-errors:
//!   Config   ParseError, MissingKey, InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs       NotFound, IoError
//! ```
//!
//! Call sites use [`Result`] (`anyhow`) to attach context; the typed errors
//! below are what ends up at the bottom of the chain.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BuildError`].
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Top-level error type.
///
/// Sub-errors are boxed so the enum stays pointer-sized plus tag.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// External process error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BuildError {
                fn from(err: $error) -> Self {
                    BuildError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or deserialize configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

/// External process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found on disk or in PATH.
    #[error("executable not found: '{name}'")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a code outside the success set.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error on a path.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
