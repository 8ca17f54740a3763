// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scan target: an endpoint identified by host, port, and service name.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single endpoint to audit: `host:port` bound to a registered service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub service: String,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16, service: impl Into<String>) -> Self {
        Self { host: host.into(), port, service: service.into() }
    }

    /// Parse `HOST` or `HOST:PORT` (§6.3). The service default port is used
    /// when no port is given; callers without a known service must supply one.
    pub fn parse(raw: &str, service: &str) -> Result<Self, TargetParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TargetParseError::Empty);
        }

        let (host, port) = match raw.rsplit_once(':') {
            // IPv6 literals contain ':' themselves; only treat the split as a
            // port separator when the tail parses as u16 and the head isn't
            // itself colon-free-but-bracketed IPv6 shorthand.
            Some((host, port_str)) if !host.is_empty() && port_str.chars().all(|c| c.is_ascii_digit()) => {
                let port: u16 = port_str
                    .parse()
                    .map_err(|_| TargetParseError::InvalidPort(port_str.to_string()))?;
                (host.to_string(), Some(port))
            }
            _ => (raw.to_string(), None),
        };

        let port = match port {
            Some(p) => p,
            None => default_port(service).ok_or_else(|| TargetParseError::NoDefaultPort(service.to_string()))?,
        };

        Ok(Target::new(host, port, service))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("empty target")]
    Empty,
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("no default port known for service {0:?}")]
    NoDefaultPort(String),
}

/// Well-known default ports, §6.3.
pub fn default_port(service: &str) -> Option<u16> {
    let port = match service {
        "ssh" => 22,
        "ftp" => 21,
        "mysql" => 3306,
        "mssql" => 1433,
        "postgresql" | "postgres" => 5432,
        "oracle" => 1521,
        "redis" => 6379,
        "mongodb" => 27017,
        "dameng" => 5236,
        "telnet" => 23,
        "rdp" => 3389,
        "vnc" => 5900,
        _ => return None,
    };
    Some(port)
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
