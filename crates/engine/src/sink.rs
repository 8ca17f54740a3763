// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result Sink (C7, §4.7): where the engine publishes each completed unit.
//!
//! The engine writes under no additional synchronization of its own — sinks
//! that need single-consumer semantics provide their own channel, as
//! `ChannelSink` does here.

use async_trait::async_trait;
use scan_core::ProbeResult;
use tokio::sync::mpsc;

/// Accepts `ProbeResult`s from any number of workers concurrently.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn accept(&self, result: ProbeResult);
}

/// Multi-producer / single-consumer sink backed by a bounded channel. A slow
/// receiver blocks `accept`, which blocks workers, which throttles
/// submission — the backpressure chain §5 requires.
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<ProbeResult>,
}

impl ChannelSink {
    /// Create a sink/receiver pair. `capacity` bounds how far workers can
    /// run ahead of the consumer.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ProbeResult>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl ResultSink for ChannelSink {
    async fn accept(&self, result: ProbeResult) {
        // The receiving end outliving every worker is the engine's job
        // (§5: closed by the engine exactly once after all workers exit);
        // a closed channel here just means the consumer gave up early.
        let _ = self.tx.send(result).await;
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
