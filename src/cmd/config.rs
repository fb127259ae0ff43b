// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration assembly from CLI options.
//!
//! ```text
//! project root:  --project-root > paths.project_root > discovered > cwd
//! config files:  <root>/scp-build.toml (optional), then --config FILE...
//! ```

use std::path::{Path, PathBuf};

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::paths::discover_project_root;
use crate::config::{Config, ENV_PREFIX, PROJECT_CONFIG_FILE};
use crate::error::Result;
use crate::logging::LogConfig;

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Builds the loader for `global`, relative to `cwd`.
///
/// # Errors
///
/// Returns an error if a `--set` entry is malformed.
pub fn build_config_loader(global: &GlobalOptions, cwd: &Path) -> Result<ConfigLoader> {
    let cli_root = global.project_root.as_deref().map(|p| absolutize(p, cwd));
    let root = cli_root
        .clone()
        .or_else(|| discover_project_root(cwd))
        .unwrap_or_else(|| cwd.to_path_buf());

    let mut loader = ConfigLoader::new()
        .set_default("paths.project_root", root.display().to_string())?
        .add_toml_file_optional(root.join(PROJECT_CONFIG_FILE));
    for path in &global.configs {
        loader = loader.add_toml_file(absolutize(path, cwd));
    }
    let mut loader = loader
        .with_env_prefix(ENV_PREFIX)
        .apply_overrides(global.to_config_overrides())?;
    if let Some(root) = cli_root {
        loader = loader.set("paths.project_root", root.display().to_string())?;
    }
    Ok(loader)
}

/// Merged configuration plus the files it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Config files that existed, in load order.
    pub files: Vec<PathBuf>,
}

/// Loads the configuration for `global`, relative to `cwd`.
///
/// # Errors
///
/// Returns an error if a config file is missing or invalid, or an override
/// does not match the configuration structure.
pub fn load_config(global: &GlobalOptions, cwd: &Path) -> Result<LoadedConfig> {
    let loader = build_config_loader(global, cwd)?;
    let files = loader.loaded_files().to_vec();
    let mut config = loader.build()?;
    if let Some(root) = config.paths.project_root.take() {
        config.paths.project_root = Some(absolutize(&root, cwd));
    }
    Ok(LoadedConfig { config, files })
}

/// Logging settings from the `[global]` section.
#[must_use]
pub fn log_config(config: &Config) -> LogConfig {
    let console_level = config.global.output_log_level;
    let file_level = config.global.file_log_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}
