// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented file loading shared by the target, username, and password
//! file flags (`-T`, `-ul`, `-pl`): one entry per line, `#`-prefixed lines
//! and blank lines ignored.

use std::path::Path;

use crate::error::IoError;

pub async fn load_lines(path: &Path) -> Result<Vec<String>, IoError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IoError::Read { path: path.to_path_buf(), source })?;
    Ok(parse_lines(&raw))
}

fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated `-u`/`-p` flag value into its entries, trimming
/// whitespace around each one.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
