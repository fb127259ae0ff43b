// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.

use tracing::{debug, info, warn};

use crate::cli::build::BuildArgs;
use crate::cmd::config::LoadedConfig;
use crate::error::Result;
use crate::task::Component;
use crate::task::tools::ToolContext;

/// Main handler for the build.
///
/// # Errors
///
/// Returns an error if the project paths cannot be resolved or any build
/// step fails.
pub async fn run_build_command(args: &BuildArgs, loaded: LoadedConfig) -> Result<()> {
    let LoadedConfig { config, files } = loaded;
    for file in &files {
        debug!(path = %file.display(), "Loaded config");
    }
    for line in config.format_options() {
        debug!("{line}");
    }

    if args.clean_build && args.component == Component::Doc {
        warn!("--clean-build only applies to the lib component, ignoring");
    }

    let ctx = ToolContext::from_config(config)?;
    info!(
        component = %args.component,
        project_root = %ctx.paths().project_root.display(),
        "Building"
    );

    args.task().run(&ctx).await
}
