// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SSH reference probe: password authentication over a fresh connection per
//! attempt. Host key verification is intentionally disabled — this is an
//! auditing tool scanning hosts it does not already trust, matching the
//! original tool's `InsecureIgnoreHostKey` behavior.

use std::sync::Arc;

use async_trait::async_trait;
use russh::client::{self, Handle};
use russh_keys::key::PublicKey;
use scan_core::ProbeRequest;

use crate::probe::{HostProbe, ProbeFailure};
use crate::retry::with_retry;

#[derive(Debug, Default)]
pub struct SshProbe;

#[async_trait]
impl HostProbe for SshProbe {
    async fn probe(&self, req: &ProbeRequest) -> Result<(), ProbeFailure> {
        with_retry(req, || async { attempt(req).await }).await
    }
}

struct AcceptAnyHostKey;

#[async_trait]
impl client::Handler for AcceptAnyHostKey {
    type Error = russh::Error;

    async fn check_server_key(&mut self, _key: &PublicKey) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

async fn attempt(req: &ProbeRequest) -> Result<(), ProbeFailure> {
    let config = Arc::new(client::Config::default());
    let mut session: Handle<AcceptAnyHostKey> =
        client::connect(config, (req.host.as_str(), req.port), AcceptAnyHostKey)
            .await
            .map_err(|e| ProbeFailure::Unreachable(e.to_string()))?;

    let authenticated = session
        .authenticate_password(&req.username, &req.password)
        .await
        .map_err(|e| ProbeFailure::Protocol(e.to_string()))?;

    if !authenticated {
        return Err(ProbeFailure::AuthRejected);
    }

    let _ = session.disconnect(russh::Disconnect::ByApplication, "", "en").await;
    Ok(())
}

#[cfg(test)]
#[path = "ssh_tests.rs"]
mod tests;
