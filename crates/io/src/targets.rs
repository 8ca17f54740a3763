// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target-file loading (`-T FILE`): one `HOST[:PORT]` per line, same syntax
//! as the single-target `-t` flag.

use std::path::Path;

use scan_core::{Target, TargetParseError};
use thiserror::Error;

use crate::error::IoError;
use crate::lines::load_lines;

#[derive(Debug, Error)]
pub enum TargetFileError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("line {line}: {source}")]
    Parse { line: usize, #[source] source: TargetParseError },
}

pub async fn load_targets(path: &Path, service: &str) -> Result<Vec<Target>, TargetFileError> {
    let lines = load_lines(path).await?;
    lines
        .iter()
        .enumerate()
        .map(|(i, raw)| Target::parse(raw, service).map_err(|source| TargetFileError::Parse { line: i + 1, source }))
        .collect()
}

#[cfg(test)]
#[path = "targets_tests.rs"]
mod tests;
