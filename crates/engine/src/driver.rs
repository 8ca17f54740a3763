// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scan Driver (C6, §4.6): the engine's single entry point. Resolves the
//! probe, orders credentials, enumerates units per target, and drives them
//! through the worker pool until the scan drains or the global deadline
//! fires.

use std::sync::Arc;
use std::time::Duration;

use scan_core::{apply_password_template, reorder_with_priority, CompletionError, ProbeRequest, Target};
use tokio::sync::{mpsc, Mutex as AsyncMutex};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::coordinator::{TargetCoordinator, TargetKey};
use crate::rate_limiter::RateLimiter;
use crate::registry::PluginRegistry;
use crate::sink::ResultSink;
use crate::worker::{WorkUnit, Worker};

/// Grace period after the global deadline before the engine gives up on
/// stuck probes and returns (§5).
const DEADLINE_GRACE_PERIOD: Duration = Duration::from_secs(30);

const MIN_TARGET_DEADLINE: Duration = Duration::from_secs(60);
const MAX_TARGET_DEADLINE: Duration = Duration::from_secs(600);

pub struct Engine {
    config: Config,
    registry: Arc<PluginRegistry>,
}

impl Engine {
    pub fn new(config: Config, registry: Arc<PluginRegistry>) -> Self {
        Self { config, registry }
    }

    /// Run one scan to completion. `users`/`passwords` are the raw input
    /// lists (already loaded from flags or files); ordering and templating
    /// happen here, not in the caller.
    pub async fn run(
        &self,
        service: &str,
        targets: Vec<Target>,
        users: Vec<String>,
        passwords: Vec<String>,
        sink: Arc<dyn ResultSink>,
    ) -> Result<(), CompletionError> {
        if targets.is_empty() {
            return Err(CompletionError::NoTargets);
        }
        if users.is_empty() && passwords.is_empty() {
            return Err(CompletionError::NoCredentials);
        }
        let probe = self
            .registry
            .resolve(service)
            .ok_or_else(|| CompletionError::UnknownService(service.to_string()))?;

        let users = reorder_with_priority(&scan_dictionary::default_usernames(service), &users);
        let passwords = reorder_with_priority(&scan_dictionary::default_passwords(service), &passwords);

        let global_cancel = CancellationToken::new();
        let coordinator = Arc::new(TargetCoordinator::new(global_cancel.clone(), self.config.exhaustive));
        let rate_limiter = RateLimiter::new(self.config.rate_per_second);

        let queue_capacity = self.config.concurrency.max(1);
        let (work_tx, work_rx) = mpsc::channel::<WorkUnit>(queue_capacity);
        let work_rx = Arc::new(AsyncMutex::new(work_rx));

        let mut workers = Vec::with_capacity(self.config.concurrency);
        for _ in 0..self.config.concurrency.max(1) {
            let worker = Worker {
                probe: probe.clone(),
                coordinator: coordinator.clone(),
                rate_limiter: rate_limiter.clone(),
                sink: sink.clone(),
                work_rx: work_rx.clone(),
            };
            workers.push(tokio::spawn(worker.run()));
        }

        let per_target_deadline = if self.config.per_target_deadline.is_zero() {
            auto_target_deadline(
                self.config.per_attempt_timeout,
                users.len() * passwords.len() + 1,
                self.config.concurrency.max(1),
            )
        } else {
            self.config.per_target_deadline
        };

        let enumerate = self.enumerate_all(
            service,
            &targets,
            &users,
            &passwords,
            per_target_deadline,
            coordinator.clone(),
            work_tx,
        );

        let drain = async {
            enumerate.await;
            for worker in workers {
                let _ = worker.await;
            }
        };

        if self.config.global_deadline.is_zero() {
            drain.await;
            return Ok(());
        }

        tokio::select! {
            _ = drain => Ok(()),
            _ = tokio::time::sleep(self.config.global_deadline) => {
                global_cancel.cancel();
                tokio::time::sleep(DEADLINE_GRACE_PERIOD).await;
                Err(CompletionError::GlobalDeadlineExceeded)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn enumerate_all(
        &self,
        service: &str,
        targets: &[Target],
        users: &[String],
        passwords: &[String],
        per_target_deadline: Duration,
        coordinator: Arc<TargetCoordinator>,
        work_tx: mpsc::Sender<WorkUnit>,
    ) {
        for target in targets {
            let key = TargetKey(target.host.clone(), target.port);
            let handle = coordinator.begin(key.clone(), per_target_deadline);

            let base = |username: String, password: String| ProbeRequest {
                host: target.host.clone(),
                port: target.port,
                service: service.to_string(),
                username,
                password,
                timeout: self.config.per_attempt_timeout,
                retries: self.config.retries,
                cancel: handle.cancel.clone(),
            };

            coordinator.track_submission(&key);
            if work_tx
                .send(WorkUnit { key: key.clone(), request: base(String::new(), String::new()) })
                .await
                .is_err()
            {
                return;
            }

            'credentials: for username in users {
                for raw_password in passwords {
                    if coordinator.is_solved(&key) && !self.config.exhaustive {
                        break 'credentials;
                    }
                    let password = apply_password_template(raw_password, username);
                    coordinator.track_submission(&key);
                    let unit =
                        WorkUnit { key: key.clone(), request: base(username.clone(), password) };
                    if work_tx.send(unit).await.is_err() {
                        return;
                    }
                }
            }

            coordinator.finish(&key);
        }
    }
}

/// Per-target deadline formula (§4.5): `min(max(avg_probe_time *
/// total_combinations / parallelism, 1 minute), 10 minutes)`. The
/// per-attempt timeout stands in for `avg_probe_time` — the engine has no
/// better estimate before a single probe has run.
fn auto_target_deadline(avg_probe_time: Duration, total_combinations: usize, parallelism: usize) -> Duration {
    let estimate = avg_probe_time.saturating_mul(total_combinations as u32) / parallelism.max(1) as u32;
    estimate.clamp(MIN_TARGET_DEADLINE, MAX_TARGET_DEADLINE)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
