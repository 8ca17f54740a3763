// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output-file writer: appends one line at a time, mirroring the original
//! tool's append-only result log.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::IoError;

pub struct OutputWriter {
    path: PathBuf,
    file: tokio::fs::File,
}

impl OutputWriter {
    pub async fn create(path: &Path) -> Result<Self, IoError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|source| IoError::Write { path: path.to_path_buf(), source })?;
        Ok(Self { path: path.to_path_buf(), file })
    }

    pub async fn write_line(&mut self, line: &str) -> Result<(), IoError> {
        let err = |source| IoError::Write { path: self.path.clone(), source };
        self.file.write_all(line.as_bytes()).await.map_err(err)?;
        self.file.write_all(b"\n").await.map_err(err)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
