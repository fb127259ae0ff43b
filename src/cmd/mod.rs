// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::config::load_config --> cmd::build::run_build_command
//! ```

pub mod build;
pub mod config;
