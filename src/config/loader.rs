// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(project)
//!   .add_toml_file(--config)
//!   .with_env_prefix("SCP_BUILD")
//!   .apply_overrides(--set, CLI flags)
//!        |
//!        v
//!    build() --> Config
//! ```

use anyhow::Context;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// Keys holding a list, given as a space separated string on the command
/// line and in the environment.
const LIST_KEYS: &[&str] = &["gradle.args"];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file(mut self, path: impl AsRef<Path>) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(p.to_path_buf());
        self
    }

    /// Adds a TOML file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional(mut self, path: impl AsRef<Path>) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.is_file() {
            self.files.push(p.to_path_buf());
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a single override, `key` in dotted form (`gradle.console`).
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed as a config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid config override '{key}'"))?;
        Ok(self)
    }

    /// Sets a fallback for `key`, used only when no source provides it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed as a config path.
    pub fn set_default<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_default(key, value)
            .with_context(|| format!("invalid config default '{key}'"))?;
        Ok(self)
    }

    /// Applies `key=value` overrides in order.
    ///
    /// Values of list keys (`gradle.args`) are split on whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for entries without `=`.
    pub fn apply_overrides<I, S>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in overrides {
            let entry = entry.as_ref();
            let (key, value) = parse_override(entry)?;
            self = if LIST_KEYS.contains(&key.as_str()) {
                self.set(&key, split_list(&value))?
            } else {
                self.set(&key, value)?
            };
        }
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a source has invalid
    /// syntax, or the merged result does not deserialize into `Config`.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("gradle.args"),
            ),
            None => self.builder,
        };

        let sources = self.files.iter().map(|p| p.display().to_string()).collect::<Vec<_>>();
        let merged = builder.build().map_err(|e| ConfigError::ParseError {
            path: sources.join(", "),
            message: e.to_string(),
        })?;
        let config: Config = merged.try_deserialize().map_err(|e| ConfigError::ParseError {
            path: sources.join(", "),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Files that contributed to the configuration, in load order.
    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace separated list value, empty entries dropped.
fn split_list(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

/// Splits `section.key=value` (also accepts `section/key=value`).
fn parse_override(entry: &str) -> std::result::Result<(String, String), ConfigError> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidValue {
            section: "cli".to_string(),
            key: "set".to_string(),
            message: format!("expected KEY=VALUE, got '{entry}'"),
        })?;
    let key = key.trim().replace('/', ".");
    if key.is_empty() {
        return Err(ConfigError::InvalidValue {
            section: "cli".to_string(),
            key: "set".to_string(),
            message: format!("empty key in '{entry}'"),
        });
    }
    Ok((key, value.trim().to_string()))
}
