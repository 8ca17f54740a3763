// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redis reference probe: `PING`, authenticating with `req.password` if set.
//!
//! An empty password attempts unauthenticated access, matching the
//! Driver's unauthenticated-probe-first submission (§4.6 step 4).

use async_trait::async_trait;
use redis::AsyncCommands;
use scan_core::ProbeRequest;

use crate::probe::{HostProbe, ProbeFailure};
use crate::retry::with_retry;

#[derive(Debug, Default)]
pub struct RedisProbe;

#[async_trait]
impl HostProbe for RedisProbe {
    async fn probe(&self, req: &ProbeRequest) -> Result<(), ProbeFailure> {
        with_retry(req, || async { attempt(req).await }).await
    }
}

async fn attempt(req: &ProbeRequest) -> Result<(), ProbeFailure> {
    let addr = format!("{}:{}", req.host, req.port);
    let url = if req.password.is_empty() {
        format!("redis://{addr}/0")
    } else {
        format!("redis://:{}@{addr}/0", req.password)
    };

    let client = redis::Client::open(url)
        .map_err(|e| ProbeFailure::Protocol(e.to_string()))?;
    let mut conn = client
        .get_multiplexed_tokio_connection()
        .await
        .map_err(classify)?;

    conn.ping::<()>().await.map_err(classify)
}

fn classify(err: redis::RedisError) -> ProbeFailure {
    use redis::ErrorKind;
    match err.kind() {
        ErrorKind::AuthenticationFailed => ProbeFailure::AuthRejected,
        ErrorKind::IoError => ProbeFailure::Unreachable(err.to_string()),
        _ => {
            if err.to_string().to_lowercase().contains("noauth")
                || err.to_string().to_lowercase().contains("wrong")
            {
                ProbeFailure::AuthRejected
            } else {
                ProbeFailure::Protocol(err.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "redis_tests.rs"]
mod tests;
