// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log capture and stub project helpers shared by task and tool tests.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber and returns the INFO+ messages,
/// one per line, without timestamps.
pub(crate) async fn run_with_logs<F, Fut>(f: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: Arc::clone(&buffer),
        })
        .with_max_level(Level::INFO)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    f().await?;

    let bytes = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    Ok(String::from_utf8_lossy(&bytes).to_string())
}

/// Installs an executable `gradlew` stub in `root`.
///
/// The stub appends its arguments to `gradle-calls.log`, exits with the code
/// in `gradle-exit-code` if that file exists, and fabricates artifacts for
/// `:build` (`build/libs`) and `:javadoc` (`build/docs/javadoc`).
#[cfg(unix)]
pub(crate) fn install_gradlew_stub(root: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let script = r#"#!/bin/sh
echo "$*" >> gradle-calls.log
if [ -f gradle-exit-code ]; then
    exit "$(cat gradle-exit-code)"
fi
case "$*" in
    *:build*)
        mkdir -p build/libs
        echo "jar" > build/libs/openscp-java.jar
        echo "sources" > build/libs/openscp-java-sources.jar
        ;;
    *:javadoc*)
        mkdir -p build/docs/javadoc/com/samsung
        echo "<html/>" > build/docs/javadoc/index.html
        echo "<html/>" > build/docs/javadoc/com/samsung/package-summary.html
        ;;
esac
exit 0
"#;
    let path = root.join("gradlew");
    std::fs::write(&path, script)?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
}

/// Lines recorded by the stub, one invocation per line.
pub(crate) fn recorded_gradle_calls(root: &Path) -> Vec<String> {
    std::fs::read_to_string(root.join("gradle-calls.log"))
        .map(|log| log.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
