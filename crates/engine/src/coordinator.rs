// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target Coordinator (C5, §4.5): owns per-target state — the `solved` flag,
//! the target's cancellation scope, and in-flight bookkeeping that decides
//! when a target's state can be destroyed.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio_util::sync::CancellationToken;

/// Identifies a target's state entry. `(host, port)` is the natural key:
/// two targets resolving to the same host/port share one coordinator slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetKey(pub String, pub u16);

struct TargetStateInner {
    solved: AtomicBool,
    cancel: CancellationToken,
    in_flight: AtomicUsize,
    enumeration_done: AtomicBool,
}

/// Returned by `begin`. Carries the cancellation scope every unit submitted
/// for this target must be built with.
#[derive(Clone)]
pub struct TargetHandle {
    pub key: TargetKey,
    pub cancel: CancellationToken,
}

/// Owns `(host, port) -> TargetState`. Reading `solved` is lock-free;
/// mutation goes through atomics and the concurrent map's fine-grained
/// sharding, never a single coarse lock.
pub struct TargetCoordinator {
    states: DashMap<TargetKey, Arc<TargetStateInner>>,
    global_cancel: CancellationToken,
    exhaustive: bool,
}

impl TargetCoordinator {
    pub fn new(global_cancel: CancellationToken, exhaustive: bool) -> Self {
        Self { states: DashMap::new(), global_cancel, exhaustive }
    }

    /// Create state for `key` with a cancel handle that is a child of the
    /// global scan context, and spawn the per-target deadline watchdog.
    pub fn begin(&self, key: TargetKey, per_target_deadline: Duration) -> TargetHandle {
        let cancel = self.global_cancel.child_token();
        let state = Arc::new(TargetStateInner {
            solved: AtomicBool::new(false),
            cancel: cancel.clone(),
            in_flight: AtomicUsize::new(0),
            enumeration_done: AtomicBool::new(false),
        });
        self.states.insert(key.clone(), state);

        let watchdog_cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(per_target_deadline) => watchdog_cancel.cancel(),
                _ = watchdog_cancel.cancelled() => {}
            }
        });

        TargetHandle { key, cancel }
    }

    pub fn exhaustive(&self) -> bool {
        self.exhaustive
    }

    pub fn is_solved(&self, key: &TargetKey) -> bool {
        self.states.get(key).map(|s| s.solved.load(Ordering::Acquire)).unwrap_or(false)
    }

    /// CAS false -> true. Returns whether this call performed the
    /// transition. On success, in non-exhaustive mode, fires the target's
    /// cancellation — this happens-after the CAS, so a subsequent
    /// `is_solved` on any thread observes `true`.
    pub fn mark_solved(&self, key: &TargetKey) -> bool {
        let Some(state) = self.states.get(key) else { return false };
        let transitioned = state
            .solved
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if transitioned && !self.exhaustive {
            state.cancel.cancel();
        }
        transitioned
    }

    /// Record that one more unit has been submitted for `key`.
    pub fn track_submission(&self, key: &TargetKey) {
        if let Some(state) = self.states.get(key) {
            state.in_flight.fetch_add(1, Ordering::AcqRel);
        }
    }

    /// Record that a submitted unit has reached a terminal result. Destroys
    /// the target's state if enumeration is done and no units remain
    /// in-flight.
    pub fn track_completion(&self, key: &TargetKey) {
        let should_remove = if let Some(state) = self.states.get(key) {
            let remaining = state.in_flight.fetch_sub(1, Ordering::AcqRel) - 1;
            remaining == 0 && state.enumeration_done.load(Ordering::Acquire)
        } else {
            false
        };
        if should_remove {
            self.states.remove(key);
        }
    }

    /// Called once the Driver has enumerated every combination for `key`.
    /// Destroys the state immediately if nothing is in-flight.
    pub fn finish(&self, key: &TargetKey) {
        let should_remove = if let Some(state) = self.states.get(key) {
            state.enumeration_done.store(true, Ordering::Release);
            state.in_flight.load(Ordering::Acquire) == 0
        } else {
            false
        };
        if should_remove {
            self.states.remove(key);
        }
    }

    #[cfg(test)]
    fn contains(&self, key: &TargetKey) -> bool {
        self.states.contains_key(key)
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
