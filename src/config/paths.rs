// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! project_root/
//!   build/               build_dir
//!     libs/              libs_dir
//!     docs/              docs_dir
//!   .out/                out_dir
//!     deliverables/      deliverables_dir
//!       java/            deliverables_java_dir
//!         docs/          deliverables_docs_dir
//! ```
//!
//! Every entry is optional in `[paths]`. Relative overrides resolve against
//! the parent shown above; absolute ones are taken as is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Files whose presence marks a Gradle project root.
const ROOT_MARKERS: &[&str] = &["gradlew", "settings.gradle", "settings.gradle.kts"];

/// `[paths]` section as written by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libs_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverables_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverables_java_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverables_docs_dir: Option<PathBuf>,
}

/// Fully resolved path set, computed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub project_root: PathBuf,
    pub build_dir: PathBuf,
    pub libs_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub out_dir: PathBuf,
    pub deliverables_dir: PathBuf,
    pub deliverables_java_dir: PathBuf,
    pub deliverables_docs_dir: PathBuf,
}

impl ProjectPaths {
    /// Default layout below `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let build_dir = project_root.join("build");
        let out_dir = project_root.join(".out");
        let deliverables_dir = out_dir.join("deliverables");
        let deliverables_java_dir = deliverables_dir.join("java");
        Self {
            libs_dir: build_dir.join("libs"),
            docs_dir: build_dir.join("docs"),
            deliverables_docs_dir: deliverables_java_dir.join("docs"),
            project_root,
            build_dir,
            out_dir,
            deliverables_dir,
            deliverables_java_dir,
        }
    }
}

impl PathsConfig {
    /// Configured entries by key, unset ones included.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Option<&Path>); 8] {
        [
            ("project_root", self.project_root.as_deref()),
            ("build_dir", self.build_dir.as_deref()),
            ("libs_dir", self.libs_dir.as_deref()),
            ("docs_dir", self.docs_dir.as_deref()),
            ("out_dir", self.out_dir.as_deref()),
            ("deliverables_dir", self.deliverables_dir.as_deref()),
            ("deliverables_java_dir", self.deliverables_java_dir.as_deref()),
            ("deliverables_docs_dir", self.deliverables_docs_dir.as_deref()),
        ]
    }

    /// Resolves the configured overrides into a [`ProjectPaths`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if `project_root` is unset.
    pub fn resolve(&self) -> std::result::Result<ProjectPaths, ConfigError> {
        let root = self
            .project_root
            .clone()
            .ok_or_else(|| ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "project_root".to_string(),
            })?;

        let pick = |value: &Option<PathBuf>, parent: &Path, default: &str| match value {
            Some(p) if p.is_relative() => parent.join(p),
            Some(p) => p.clone(),
            None => parent.join(default),
        };

        let build_dir = pick(&self.build_dir, &root, "build");
        let libs_dir = pick(&self.libs_dir, &build_dir, "libs");
        let docs_dir = pick(&self.docs_dir, &build_dir, "docs");
        let out_dir = pick(&self.out_dir, &root, ".out");
        let deliverables_dir = pick(&self.deliverables_dir, &out_dir, "deliverables");
        let deliverables_java_dir = pick(&self.deliverables_java_dir, &deliverables_dir, "java");
        let deliverables_docs_dir = pick(&self.deliverables_docs_dir, &deliverables_java_dir, "docs");

        Ok(ProjectPaths {
            project_root: root,
            build_dir,
            libs_dir,
            docs_dir,
            out_dir,
            deliverables_dir,
            deliverables_java_dir,
            deliverables_docs_dir,
        })
    }
}

/// Walks up from `start` to the nearest directory holding a Gradle root marker.
#[must_use]
pub fn discover_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()))
        .map(Path::to_path_buf)
}
