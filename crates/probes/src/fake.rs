// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `FakeProbe` — a scriptable `HostProbe` for engine-level tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use scan_core::ProbeRequest;

use crate::probe::{HostProbe, ProbeFailure};

type Script = Arc<Mutex<Box<dyn FnMut(&ProbeRequest) -> Result<(), ProbeFailure> + Send>>>;

/// A probe whose behavior is entirely driven by a closure, for deterministic
/// engine tests. Counts invocations so tests can assert on call volume.
#[derive(Clone)]
pub struct FakeProbe {
    script: Script,
    calls: Arc<AtomicUsize>,
}

impl FakeProbe {
    /// A probe that always succeeds.
    pub fn always_success() -> Self {
        Self::from_fn(|_| Ok(()))
    }

    /// A probe that always returns the given failure.
    pub fn always_fails(failure: impl Fn() -> ProbeFailure + Send + 'static) -> Self {
        Self::from_fn(move |_| Err(failure()))
    }

    /// A probe driven by an arbitrary closure.
    pub fn from_fn(
        f: impl FnMut(&ProbeRequest) -> Result<(), ProbeFailure> + Send + 'static,
    ) -> Self {
        Self { script: Arc::new(Mutex::new(Box::new(f))), calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// Succeeds only for the given (username, password) pair; fails with
    /// `AuthRejected` otherwise.
    pub fn succeeds_for(username: &'static str, password: &'static str) -> Self {
        Self::from_fn(move |req| {
            if req.username == username && req.password == password {
                Ok(())
            } else {
                Err(ProbeFailure::AuthRejected)
            }
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostProbe for FakeProbe {
    async fn probe(&self, req: &ProbeRequest) -> Result<(), ProbeFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.script.lock())(req)
    }
}
