// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tempfile::NamedTempFile;

use super::*;

#[tokio::test]
async fn load_lines_skips_comments_and_blank_lines() {
    let file = NamedTempFile::new().unwrap();
    tokio::fs::write(file.path(), "10.0.0.1\n# a comment\n\n  10.0.0.2:2222  \n").await.unwrap();

    let lines = load_lines(file.path()).await.unwrap();
    assert_eq!(lines, vec!["10.0.0.1".to_string(), "10.0.0.2:2222".to_string()]);
}

#[tokio::test]
async fn load_lines_reports_missing_file() {
    let err = load_lines(std::path::Path::new("/nonexistent/does-not-exist.txt")).await;
    assert!(err.is_err());
}

#[test]
fn split_csv_trims_and_drops_empty_entries() {
    assert_eq!(split_csv(" root, admin ,, guest"), vec!["root", "admin", "guest"]);
}
