// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rate Limiter (C3, §4.3): a shared permit channel ticking at `R` permits
//! per second. Permits do not accumulate beyond a buffer of 1 — a slow
//! consumer never builds up a backlog of stale permits.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};

/// Handle shared by every worker. Cloning shares the same ticker and the
/// same receiver; `acquire` serializes receives across workers.
#[derive(Clone)]
pub struct RateLimiter {
    rx: Arc<Mutex<mpsc::Receiver<()>>>,
    _ticker: Arc<TickerGuard>,
}

struct TickerGuard(tokio::task::JoinHandle<()>);

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl RateLimiter {
    /// Start a limiter emitting roughly `rate_per_second` permits per
    /// second. `rate_per_second` must be at least 1 — the CLI and
    /// `Config` default to 150 and never let it reach zero.
    pub fn new(rate_per_second: u32) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let period = Duration::from_secs_f64(1.0 / rate_per_second.max(1) as f64);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                // try_send, not send: permits do not accumulate.
                if tx.try_send(()).is_err() && tx.is_closed() {
                    return;
                }
            }
        });
        Self { rx: Arc::new(Mutex::new(rx)), _ticker: Arc::new(TickerGuard(handle)) }
    }

    /// Wait for the next permit. `None` if the limiter has been stopped
    /// (channel closed) — callers should treat this as cancellation.
    pub async fn acquire(&self) -> Option<()> {
        self.rx.lock().await.recv().await
    }
}

#[cfg(test)]
#[path = "rate_limiter_tests.rs"]
mod tests;
