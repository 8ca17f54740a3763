// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::{Duration, SystemTime};

use scan_core::ProbeRequest;
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

use super::*;

fn request(username: &str, password: &str) -> ProbeRequest {
    ProbeRequest {
        host: "10.0.0.1".to_string(),
        port: 6379,
        service: "redis".to_string(),
        username: username.to_string(),
        password: password.to_string(),
        timeout: Duration::from_secs(1),
        retries: 0,
        cancel: CancellationToken::new(),
    }
}

fn result(outcome: ProbeOutcome, username: &str, password: &str) -> ProbeResult {
    ProbeResult::new(request(username, password), outcome, None, Duration::from_millis(1), SystemTime::now())
}

#[tokio::test]
async fn success_increments_the_counter_and_writes_the_output_file() {
    let file = NamedTempFile::new().unwrap();
    let output = OutputWriter::create(file.path()).await.unwrap();
    let sink = PrintingSink::new(false, Some(output));

    sink.accept(result(ProbeOutcome::Success, "root", "hunter2")).await;
    assert_eq!(sink.success_count(), 1);

    let contents = tokio::fs::read_to_string(file.path()).await.unwrap();
    assert_eq!(contents.trim(), "[6379][redis] 10.0.0.1 root hunter2");
}

#[tokio::test]
async fn failures_do_not_increment_the_success_counter() {
    let sink = PrintingSink::new(true, None);
    sink.accept(result(ProbeOutcome::AuthFailed, "root", "wrong")).await;
    assert_eq!(sink.success_count(), 0);
}
