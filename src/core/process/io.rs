// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for child processes.
//!
//! ```text
//! wait_forwarding()
//!   stdout/stderr reader tasks, one per piped stream
//!     raw line (read_until '\n') --> lossy UTF-8 --> info!(process, stream, line)
//!   wait()
//!   --> exit code (-1 when killed by a signal)
//! ```
//!
//! Readers drain their pipe to EOF whatever the bytes are, so a child is
//! never killed by a closed pipe.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::Result;

/// Forwards piped output to the log and waits for the child to exit.
pub(super) async fn wait_forwarding(name: &str, child: &mut Child) -> Result<i32> {
    let stdout = spawn_reader(child.stdout.take(), name, "stdout");
    let stderr = spawn_reader(child.stderr.take(), name, "stderr");

    let status = child
        .wait()
        .await
        .with_context(|| format!("failed waiting for process {name}"))?;

    for handle in [stdout, stderr].into_iter().flatten() {
        if let Err(e) = handle.await {
            warn!(process = %name, error = %e, "output reader failed");
        }
    }

    Ok(status.code().unwrap_or(-1))
}

fn spawn_reader<R>(stream: Option<R>, process: &str, stream_name: &'static str) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let process = process.to_string();
    stream.map(|stream| tokio::spawn(forward_lines(stream, process, stream_name)))
}

/// Strips one trailing `\n` or `\r\n`.
fn trim_line_ending(mut line: &[u8]) -> &[u8] {
    if let [rest @ .., b'\n'] = line {
        line = rest;
    }
    if let [rest @ .., b'\r'] = line {
        line = rest;
    }
    line
}

async fn forward_lines<R>(stream: R, process: String, stream_name: &'static str)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(trim_line_ending(&buf));
                info!(process = %process, stream = stream_name, "{line}");
            }
            Err(e) => {
                warn!(process = %process, stream = stream_name, error = %e, "error reading stream");
                break;
            }
        }
    }
}
