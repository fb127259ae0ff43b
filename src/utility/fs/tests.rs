// scp-build: OpenSCP Java library build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::{CopyStats, copy_dir_contents_async};
use super::remove::remove_dir_if_exists;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[tokio::test]
async fn test_remove_dir_if_exists_removes_tree() {
    let temp = temp_dir();
    let target = temp.path().join("build/libs");
    std::fs::create_dir_all(target.join("nested")).unwrap();
    std::fs::write(target.join("nested/old.jar"), "stale").unwrap();

    assert!(remove_dir_if_exists(&target).await.unwrap());
    assert!(!target.exists());
    assert!(temp.path().join("build").exists(), "parent must survive");
}

#[tokio::test]
async fn test_remove_dir_if_exists_missing_is_ok() {
    let temp = temp_dir();
    assert!(!remove_dir_if_exists(&temp.path().join("absent")).await.unwrap());
}

#[tokio::test]
async fn test_remove_dir_if_exists_removes_plain_file() {
    let temp = temp_dir();
    let file = temp.path().join("docs");
    std::fs::write(&file, "not a directory").unwrap();

    assert!(remove_dir_if_exists(&file).await.unwrap());
    assert!(!file.exists());
}

#[tokio::test]
async fn test_copy_dir_contents_recursive() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("out/deliverables/java");
    std::fs::create_dir_all(src.join("javadoc/com")).unwrap();
    std::fs::write(src.join("openscp.jar"), "jar").unwrap();
    std::fs::write(src.join("javadoc/index.html"), "<html/>").unwrap();
    std::fs::write(src.join("javadoc/com/Scp03.html"), "<html/>").unwrap();

    let stats = copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(stats, CopyStats { files: 3, dirs: 2 });
    assert_eq!(std::fs::read_to_string(dst.join("openscp.jar")).unwrap(), "jar");
    assert!(dst.join("javadoc/com/Scp03.html").is_file());
}

#[tokio::test]
async fn test_copy_dir_contents_overwrites_existing() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dst).unwrap();
    std::fs::write(src.join("a.jar"), "new").unwrap();
    std::fs::write(dst.join("a.jar"), "old").unwrap();

    copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(std::fs::read_to_string(dst.join("a.jar")).unwrap(), "new");
}

#[tokio::test]
async fn test_copy_dir_contents_missing_source_fails() {
    let temp = temp_dir();
    let err = copy_dir_contents_async(&temp.path().join("absent"), &temp.path().join("dst"))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("filesystem error: I/O error on"));
}
