// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `HostProbe`: the external contract every protocol plugin implements (§4.2).

use async_trait::async_trait;
use scan_core::ProbeRequest;
use thiserror::Error;

/// What a probe returns on a non-success attempt.
///
/// The engine never parses this to extract a message — it only matches on
/// the variant to populate `ProbeOutcome`. Distinguishing auth rejection
/// from transport failure is the probe's job, not the engine's.
#[derive(Debug, Error)]
pub enum ProbeFailure {
    #[error("authentication rejected")]
    AuthRejected,
    #[error("unreachable: {0}")]
    Unreachable(String),
    #[error("timed out")]
    TimedOut,
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// A protocol plugin. One probe per service; opaque to the engine beyond
/// this single method.
///
/// Implementations must:
/// - respect `req.cancel` and return promptly once it fires;
/// - enforce a per-attempt timeout no larger than `req.timeout`;
/// - retry up to `req.retries` times on transport failure only, never after
///   an explicit auth rejection;
/// - release every socket or session they open on every return path.
#[async_trait]
pub trait HostProbe: Send + Sync + 'static {
    async fn probe(&self, req: &ProbeRequest) -> Result<(), ProbeFailure>;
}
