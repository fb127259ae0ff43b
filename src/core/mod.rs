// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process management.
//!
//! ```text
//!   core
//!    |
//!    v
//! process
//!    |
//! ProcessBuilder --> tokio::process --> log lines, exit code
//! ```

pub mod process;
