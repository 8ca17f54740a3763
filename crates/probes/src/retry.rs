// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared retry/backoff helper for reference probes (§4.2, §9).
//!
//! Total attempts = `1 + req.retries`. A fixed ~500ms backoff separates
//! attempts. An `AuthRejected` failure is terminal — no further attempts are
//! made, matching "must not retry on explicit authentication failure".

use std::future::Future;
use std::time::Duration;

use scan_core::ProbeRequest;

use crate::probe::ProbeFailure;

const BACKOFF: Duration = Duration::from_millis(500);

/// Run `attempt` up to `req.total_attempts()` times, enforcing `req.timeout`
/// per attempt and honoring `req.cancel` between attempts and during the
/// backoff sleep.
pub async fn with_retry<F, Fut>(req: &ProbeRequest, mut attempt: F) -> Result<(), ProbeFailure>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), ProbeFailure>>,
{
    let mut last = ProbeFailure::TimedOut;
    for n in 0..req.total_attempts() {
        if req.cancel.is_cancelled() {
            return Err(last);
        }
        if n > 0 {
            tokio::select! {
                _ = tokio::time::sleep(BACKOFF) => {}
                _ = req.cancel.cancelled() => return Err(last),
            }
        }

        let attempted = tokio::select! {
            result = tokio::time::timeout(req.timeout, attempt()) => result,
            _ = req.cancel.cancelled() => return Err(last),
        };

        match attempted {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(ProbeFailure::AuthRejected)) => return Err(ProbeFailure::AuthRejected),
            Ok(Err(err)) => last = err,
            Err(_elapsed) => last = ProbeFailure::TimedOut,
        }
    }
    Err(last)
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
