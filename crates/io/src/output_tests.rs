// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tempfile::NamedTempFile;

use super::*;

#[tokio::test]
async fn appends_lines_with_trailing_newlines() {
    let file = NamedTempFile::new().unwrap();
    let mut writer = OutputWriter::create(file.path()).await.unwrap();
    writer.write_line("redis://10.0.0.1:6379 -> hunter2").await.unwrap();
    writer.write_line("ssh://10.0.0.2:22 -> toor").await.unwrap();
    drop(writer);

    let contents = tokio::fs::read_to_string(file.path()).await.unwrap();
    assert_eq!(contents, "redis://10.0.0.1:6379 -> hunter2\nssh://10.0.0.2:22 -> toor\n");
}

#[tokio::test]
async fn reopening_the_same_path_appends_rather_than_truncates() {
    let file = NamedTempFile::new().unwrap();
    OutputWriter::create(file.path()).await.unwrap().write_line("first").await.unwrap();
    OutputWriter::create(file.path()).await.unwrap().write_line("second").await.unwrap();

    let contents = tokio::fs::read_to_string(file.path()).await.unwrap();
    assert_eq!(contents, "first\nsecond\n");
}
