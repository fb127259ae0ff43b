// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::{Path, PathBuf};

use scp_build::config::Config;
use scp_build::config::types::ConsoleMode;
use scp_build::logging::LogLevel;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.gradle.console, ConsoleMode::Plain);
    assert!(config.gradle.wrapper.is_none());
    assert!(config.paths.project_root.is_none());
}

#[test]
fn config_parse_all_sections() {
    let toml = r#"
[global]
dry = true
output_log_level = 4
file_log_level = 5
log_file = "logs/scp-build.log"

[paths]
project_root = "/work/openscp"
out_dir = "dist"

[gradle]
wrapper = "tools/gradlew"
console = "verbose"
args = ["--offline", "--stacktrace"]
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, Some(LogLevel::TRACE));
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(Path::new("logs/scp-build.log"))
    );
    assert_eq!(config.gradle.wrapper, Some(PathBuf::from("tools/gradlew")));
    assert_eq!(config.gradle.console, ConsoleMode::Verbose);
    assert_eq!(config.gradle.args.len(), 2);

    let paths = config.project_paths().unwrap();
    assert_eq!(paths.deliverables_java_dir, paths.out_dir.join("deliverables/java"));
    assert!(paths.out_dir.ends_with("dist"));
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[maven]\nrepository = \"central\"\n").is_err());
}

#[test]
fn config_parse_rejects_log_level_out_of_range() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn config_parse_rejects_unknown_console_mode() {
    assert!(Config::parse("[gradle]\nconsole = \"fancy\"\n").is_err());
}

#[test]
fn config_project_paths_requires_root() {
    let err = Config::default().project_paths().unwrap_err();
    assert!(err.to_string().contains("project_root"), "{err}");
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(&base, "[gradle]\nconsole = \"rich\"\nargs = [\"--offline\"]\n").unwrap();
    std::fs::write(&local, "[gradle]\nconsole = \"verbose\"\n").unwrap();

    let loader = Config::builder().add_toml_file(&base).add_toml_file(&local);
    assert_eq!(loader.loaded_files(), [base.clone(), local.clone()]);

    let config = loader.build().unwrap();
    assert_eq!(config.gradle.console, ConsoleMode::Verbose);
    assert_eq!(config.gradle.args, vec!["--offline".to_string()]);
}

#[test]
fn config_invalid_toml_names_file() {
    let temp = tempfile::tempdir().unwrap();
    let broken = temp.path().join("broken.toml");
    std::fs::write(&broken, "[gradle\nconsole = ").unwrap();

    let err = Config::builder().add_toml_file(&broken).build().unwrap_err();
    assert!(err.to_string().contains("broken.toml"), "{err}");
}
