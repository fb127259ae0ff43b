// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{OutputMode, ProcessBuilder};

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("/opt/project/gradlew")
        .arg("--console=plain")
        .args(["-p", "/opt/my project", ":build"]);
    insta::assert_snapshot!(
        builder.command_line(),
        @r#"/opt/project/gradlew --console=plain -p "/opt/my project" :build"#
    );
}

#[test]
fn test_display_name_defaults_to_file_stem() {
    assert_eq!(ProcessBuilder::new("/opt/project/gradlew").display_name(), "gradlew");
    assert_eq!(
        ProcessBuilder::new("/opt/project/gradlew").name("gradle").display_name(),
        "gradle"
    );
}

#[test]
fn test_find_missing_executable() {
    assert!(ProcessBuilder::find("nonexistent_program_12345").is_none());
}

#[test]
fn test_output_mode_defaults_to_log() {
    let builder = ProcessBuilder::new("gradlew");
    assert_eq!(builder.output_mode(), OutputMode::ForwardToLog);
    assert_eq!(builder.inherit_stdio().output_mode(), OutputMode::Inherit);
}

#[cfg(unix)]
mod unix {
    use super::*;
    use crate::task::test_utils::run_with_logs;

    #[tokio::test]
    async fn test_output_forwarded_to_log() {
        let logs = run_with_logs(|| async {
            ProcessBuilder::new("/bin/sh")
                .args(["-c", "echo compiled; echo deprecated >&2"])
                .run()
                .await
        })
        .await
        .unwrap();

        assert!(logs.contains("compiled"), "{logs}");
        assert!(logs.contains("deprecated"), "{logs}");
    }

    #[tokio::test]
    async fn test_non_utf8_output_does_not_break_the_pipe() {
        let script = r#"printf 'warning: \377\n'
i=0
while [ $i -lt 20000 ]; do echo "line $i"; i=$((i+1)); done
exit 0"#;

        let logs = run_with_logs(|| async {
            ProcessBuilder::new("/bin/sh").args(["-c", script]).run().await
        })
        .await
        .unwrap();

        assert!(logs.contains("warning: \u{FFFD}"), "lossy line missing");
        assert!(logs.contains("line 19999"), "output after invalid byte was lost");
    }

    #[tokio::test]
    async fn test_crlf_line_endings_are_trimmed() {
        let logs = run_with_logs(|| async {
            ProcessBuilder::new("/bin/sh")
                .args(["-c", r"printf 'first\r\nlast'"])
                .run()
                .await
        })
        .await
        .unwrap();

        assert!(logs.contains("first"), "{logs}");
        assert!(logs.contains("last"), "{logs}");
        assert!(!logs.contains('\r'), "{logs:?}");
    }

    #[tokio::test]
    async fn test_process_non_zero_exit_fails() {
        let err = ProcessBuilder::new("/bin/sh")
            .args(["-c", "exit 3"])
            .run()
            .await
            .unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"process '/bin/sh -c \"exit 3\"' exited with code 3");
    }

    #[tokio::test]
    async fn test_process_runs_in_cwd() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();

        ProcessBuilder::new("/bin/sh")
            .args(["-c", "test -f marker.txt"])
            .cwd(temp.path())
            .run()
            .await
            .expect("marker should be found in the working directory");
    }

    #[tokio::test]
    async fn test_inherited_stdio_still_reports_exit_code() {
        let err = ProcessBuilder::new("/bin/sh")
            .args(["-c", "exit 5"])
            .inherit_stdio()
            .run()
            .await
            .unwrap_err();
        assert!(err.to_string().ends_with("exited with code 5"), "{err}");
    }
}

#[tokio::test]
async fn test_spawn_failure_is_reported() {
    let err = ProcessBuilder::new("/nonexistent/dir/gradlew")
        .run()
        .await
        .unwrap_err();
    assert!(
        err.to_string().starts_with("failed to spawn process '/nonexistent/dir/gradlew'"),
        "unexpected error: {err}"
    );
}
