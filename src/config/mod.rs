// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <project_root>/scp-build.toml (optional)
//! 3. --config FILE (repeatable, required)
//! 4. SCP_BUILD_* env vars
//! 5. --set KEY=VALUE and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! Sections and keys are separated by a double underscore:
//!
//! ```text
//! SCP_BUILD_GLOBAL__DRY=true           → global.dry = true
//! SCP_BUILD_GRADLE__CONSOLE=verbose    → gradle.console = "verbose"
//! SCP_BUILD_PATHS__OUT_DIR=/tmp/out    → paths.out_dir = "/tmp/out"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::{PathsConfig, ProjectPaths};
use types::{GlobalConfig, GradleConfig};

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "scp-build.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SCP_BUILD";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub paths: PathsConfig,
    pub gradle: GradleConfig,
}

impl Config {
    /// Creates a new configuration loader.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Loads configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Default configuration rooted at `project_root`.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn for_project(project_root: impl Into<std::path::PathBuf>) -> Self {
        let mut config = Self::default();
        config.paths.project_root = Some(project_root.into());
        config
    }

    /// Resolved path set.
    ///
    /// # Errors
    ///
    /// Returns an error if `paths.project_root` is unset.
    pub fn project_paths(&self) -> Result<ProjectPaths> {
        Ok(self.paths.resolve()?)
    }

    /// Rejects values that deserialize fine but cannot drive a build.
    ///
    /// An empty path would silently resolve to its parent directory, so the
    /// deliverables or the wrapper would land somewhere unexpected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `gradle.wrapper`,
    /// an empty Gradle argument or an empty `[paths]` entry.
    pub fn validate(&self) -> Result<()> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if let Some(wrapper) = &self.gradle.wrapper
            && wrapper.as_os_str().is_empty()
        {
            return Err(invalid("gradle", "wrapper", "path must not be empty").into());
        }
        if self.gradle.args.iter().any(|arg| arg.trim().is_empty()) {
            return Err(invalid("gradle", "args", "arguments must not be empty").into());
        }
        for (key, path) in self.paths.entries() {
            if path.is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(invalid("paths", key, "path must not be empty").into());
            }
        }
        Ok(())
    }

    /// Flattened `section.key = value` lines, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.dry", self.global.dry.to_string());
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        if let Some(level) = self.global.file_log_level {
            options.insert("global.file_log_level", level.as_u8().to_string());
        }
        if let Some(ref file) = self.global.log_file {
            options.insert("global.log_file", file.display().to_string());
        }

        options.insert("gradle.console", self.gradle.console.to_string());
        if let Some(ref wrapper) = self.gradle.wrapper {
            options.insert("gradle.wrapper", wrapper.display().to_string());
        }
        if !self.gradle.args.is_empty() {
            options.insert("gradle.args", self.gradle.args.join(" "));
        }

        if let Ok(paths) = self.paths.resolve() {
            let entries = [
                ("paths.project_root", &paths.project_root),
                ("paths.build_dir", &paths.build_dir),
                ("paths.libs_dir", &paths.libs_dir),
                ("paths.docs_dir", &paths.docs_dir),
                ("paths.out_dir", &paths.out_dir),
                ("paths.deliverables_dir", &paths.deliverables_dir),
                ("paths.deliverables_java_dir", &paths.deliverables_java_dir),
                ("paths.deliverables_docs_dir", &paths.deliverables_docs_dir),
            ];
            for (key, path) in entries {
                options.insert(key, path.display().to_string());
            }
        }

        let width = options.keys().map(|k| k.len()).max().unwrap_or(0);
        options
            .into_iter()
            .map(|(key, value)| format!("{key:<width$} = {value}"))
            .collect()
    }
}
