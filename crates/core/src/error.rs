// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion error taxonomy (§6.1, §7).
//!
//! `ConfigError` cases are checked before any probe runs and abort the scan
//! immediately; `GlobalDeadlineExceeded` and `InternalError` can only surface
//! after scanning has started.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("unknown service: {0:?}")]
    UnknownService(String),
    #[error("no targets provided")]
    NoTargets,
    #[error("no credentials provided")]
    NoCredentials,
    #[error("global deadline exceeded")]
    GlobalDeadlineExceeded,
    #[error("internal error: {0}")]
    InternalError(String),
}

impl CompletionError {
    /// Whether this error is a pre-scan `ConfigError` (§7) — checked before
    /// any probe runs, as opposed to a failure surfacing mid-scan.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CompletionError::UnknownService(_) | CompletionError::NoTargets | CompletionError::NoCredentials
        )
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
