// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()   args, cwd, stdio
//!   |
//!   v
//! spawn() --> wait_forwarding() --> exit code check
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{OutputMode, ProcessBuilder};
use super::io::wait_forwarding;
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Name used in log lines for this process.
    pub(super) fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Full command line, arguments with spaces quoted.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program().display().to_string()];
        parts.extend(self.arguments().iter().map(|arg| {
            if arg.contains(' ') {
                format!("\"{arg}\"")
            } else {
                arg.clone()
            }
        }));
        parts.join(" ")
    }

    /// Spawns the process and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the process cannot be started
    /// and `ProcessError::NonZeroExit` if it does not exit with 0. A process
    /// killed by a signal reports code -1.
    pub async fn run(self) -> Result<()> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let code = wait_forwarding(&name, &mut child).await?;
        if code != 0 {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code,
            }
            .into());
        }

        trace!(process = %name, "completed");
        Ok(())
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.arguments());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        let stdio = || match self.output_mode() {
            OutputMode::ForwardToLog => Stdio::piped(),
            OutputMode::Inherit => Stdio::inherit(),
        };
        command
            .stdin(Stdio::null())
            .stdout(stdio())
            .stderr(stdio())
            .kill_on_drop(true);

        command
    }
}
