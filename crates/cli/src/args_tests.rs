// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use clap::Parser;

use super::*;

#[test]
fn parses_minimal_required_flags() {
    let args = Args::parse_from(["credscan", "-t", "10.0.0.1", "-s", "redis", "-p", "hunter2"]);
    assert_eq!(args.target.as_deref(), Some("10.0.0.1"));
    assert_eq!(args.service, "redis");
    assert_eq!(args.concurrency, 25);
    assert_eq!(args.rate_per_second, 150);
    assert_eq!(args.timeout, Duration::from_secs(10));
    assert_eq!(args.retries, 2);
    assert!(!args.exhaustive);
}

#[test]
fn accepts_humantime_durations() {
    let args = Args::parse_from([
        "credscan", "-t", "10.0.0.1", "-s", "ssh", "-p", "x", "--timeout", "2s", "--global-timeout", "5m",
    ]);
    assert_eq!(args.timeout, Duration::from_secs(2));
    assert_eq!(args.global_timeout, Duration::from_secs(300));
}

#[test]
fn rejects_missing_service() {
    let result = Args::try_parse_from(["credscan", "-t", "10.0.0.1", "-p", "x"]);
    assert!(result.is_err());
}
