// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ProbeRequest`: one (target, username, password) work unit handed to a probe (§3).

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// A single authentication attempt. `cancel` is scoped to the owning target —
/// it fires on first success (non-exhaustive mode) or target-deadline expiry.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub host: String,
    pub port: u16,
    pub service: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
    pub retries: u32,
    pub cancel: CancellationToken,
}

impl ProbeRequest {
    pub fn is_unauthenticated_probe(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    /// Total attempts a probe should make: 1 initial + `retries` extra, per
    /// the pinned reading of the open question in §9.
    pub fn total_attempts(&self) -> u32 {
        1 + self.retries
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
