// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker Pool (C4, §4.4): fixed-size pool of workers draining the shared
//! work queue.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

use futures_util::FutureExt;
use scan_core::{ProbeOutcome, ProbeRequest, ProbeResult};
use scan_probes::{HostProbe, ProbeFailure};
use tokio::sync::{mpsc, Mutex};

use crate::coordinator::{TargetCoordinator, TargetKey};
use crate::rate_limiter::RateLimiter;
use crate::sink::ResultSink;

/// One enumerated (target, credential) unit awaiting a worker.
pub struct WorkUnit {
    pub key: TargetKey,
    pub request: ProbeRequest,
}

pub struct Worker {
    pub probe: Arc<dyn HostProbe>,
    pub coordinator: Arc<TargetCoordinator>,
    pub rate_limiter: RateLimiter,
    pub sink: Arc<dyn ResultSink>,
    pub work_rx: Arc<Mutex<mpsc::Receiver<WorkUnit>>>,
}

impl Worker {
    pub async fn run(self) {
        loop {
            let unit = {
                let mut rx = self.work_rx.lock().await;
                rx.recv().await
            };
            let Some(unit) = unit else { return };
            self.handle(unit).await;
        }
    }

    async fn handle(&self, unit: WorkUnit) {
        let WorkUnit { key, request } = unit;

        if request.cancel.is_cancelled()
            || (self.coordinator.is_solved(&key) && !self.coordinator.exhaustive())
        {
            self.emit(&request, ProbeOutcome::Cancelled, None, Instant::now()).await;
            self.coordinator.track_completion(&key);
            return;
        }

        tokio::select! {
            permit = self.rate_limiter.acquire() => {
                if permit.is_none() {
                    self.emit(&request, ProbeOutcome::Cancelled, None, Instant::now()).await;
                    self.coordinator.track_completion(&key);
                    return;
                }
            }
            _ = request.cancel.cancelled() => {
                self.emit(&request, ProbeOutcome::Cancelled, None, Instant::now()).await;
                self.coordinator.track_completion(&key);
                return;
            }
        }

        let start = Instant::now();
        let probe = self.probe.clone();
        let outcome_result =
            AssertUnwindSafe(async { probe.probe(&request).await }).catch_unwind().await;

        let (outcome, error) = match outcome_result {
            Ok(Ok(())) => (ProbeOutcome::Success, None),
            Ok(Err(ProbeFailure::AuthRejected)) => (ProbeOutcome::AuthFailed, None),
            Ok(Err(ProbeFailure::Unreachable(msg))) => (ProbeOutcome::Unreachable, Some(msg)),
            Ok(Err(ProbeFailure::TimedOut)) => (ProbeOutcome::Timeout, None),
            Ok(Err(ProbeFailure::Protocol(msg))) => (ProbeOutcome::ProtocolError, Some(msg)),
            Err(_panic) => (ProbeOutcome::ProtocolError, Some("probe panicked".to_string())),
        };

        if outcome.is_success() {
            self.coordinator.mark_solved(&key);
        }

        self.emit(&request, outcome, error, start).await;
        self.coordinator.track_completion(&key);
    }

    async fn emit(
        &self,
        request: &ProbeRequest,
        outcome: ProbeOutcome,
        error: Option<String>,
        start: Instant,
    ) {
        let duration = start.elapsed();
        tracing::info!(
            service = %request.service,
            host = %request.host,
            port = request.port,
            elapsed_ms = duration.as_millis() as u64,
            outcome = %outcome,
            "probe completed"
        );
        let result = ProbeResult::new(request.clone(), outcome, error, duration, SystemTime::now());
        self.sink.accept(result).await;
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
