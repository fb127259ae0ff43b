// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   remove:  remove_dir_if_exists()
//!   copy:    copy_dir_contents_async()
//! ```

pub mod fs;
