// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Printing `ResultSink` (§6.1, §7): successes are always surfaced, failures
//! only in verbose mode. Format mirrors the original tool's
//! `[port][service] host user pass` line.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use scan_core::{ProbeOutcome, ProbeResult};
use scan_engine::ResultSink;
use scan_io::OutputWriter;
use tokio::sync::Mutex;

pub struct PrintingSink {
    verbose: bool,
    output: Option<Mutex<OutputWriter>>,
    successes: AtomicUsize,
}

impl PrintingSink {
    pub fn new(verbose: bool, output: Option<OutputWriter>) -> Self {
        Self { verbose, output: output.map(Mutex::new), successes: AtomicUsize::new(0) }
    }

    pub fn success_count(&self) -> usize {
        self.successes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResultSink for PrintingSink {
    async fn accept(&self, result: ProbeResult) {
        let req = &result.request;
        match result.outcome {
            ProbeOutcome::Success => {
                self.successes.fetch_add(1, Ordering::SeqCst);
                let line = format!("[{}][{}] {} {} {}", req.port, req.service, req.host, req.username, req.password);
                let header = crate::color::header(&format!("[{}][{}]", req.port, req.service));
                let creds = crate::color::literal(&format!("{} {}", req.username, req.password));
                println!("{header} {} {creds}", crate::color::muted(&req.host));
                if let Some(output) = &self.output {
                    if let Err(err) = output.lock().await.write_line(&line).await {
                        tracing::warn!(%err, "failed to write result to output file");
                    }
                }
            }
            ProbeOutcome::Cancelled => {
                if self.verbose {
                    tracing::debug!(host = %req.host, port = req.port, user = %req.username, "cancelled");
                }
            }
            _ if self.verbose => {
                tracing::info!(
                    host = %req.host,
                    port = req.port,
                    user = %req.username,
                    pass = %req.password,
                    outcome = %result.outcome,
                    error = result.error.as_deref().unwrap_or(""),
                    "probe failed",
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
