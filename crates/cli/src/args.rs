// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line flags (§6.2): a thin mapping onto `scan_engine::Config` and
//! the target/credential inputs the engine expects.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "credscan", about = "Credential auditing scanner", version, styles = crate::color::styles())]
pub struct Args {
    /// Single target, HOST or HOST:PORT.
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// File of targets, one per line; `#` comments.
    #[arg(short = 'T', long = "target-file")]
    pub target_file: Option<PathBuf>,

    /// Service name to audit (e.g. ssh, redis).
    #[arg(short = 's', long = "service")]
    pub service: String,

    /// Comma-separated usernames.
    #[arg(short = 'u', long = "users")]
    pub users: Option<String>,

    /// File of usernames, one per line.
    #[arg(long = "ul")]
    pub user_file: Option<PathBuf>,

    /// Comma-separated passwords.
    #[arg(short = 'p', long = "passwords")]
    pub passwords: Option<String>,

    /// File of passwords, one per line.
    #[arg(long = "pl")]
    pub password_file: Option<PathBuf>,

    /// Concurrent in-flight probes.
    #[arg(short = 'c', long = "concurrency", default_value_t = 25)]
    pub concurrency: usize,

    /// Permits per second.
    #[arg(long = "rl", default_value_t = 150)]
    pub rate_per_second: u32,

    /// Per-attempt timeout, e.g. "10s".
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Extra attempts after the first, per unit.
    #[arg(long = "retries", default_value_t = 2)]
    pub retries: u32,

    /// Keep trying credentials for a target after a success.
    #[arg(long = "fs")]
    pub exhaustive: bool,

    /// Per-target deadline, "0" (default) for auto.
    #[arg(long = "target-timeout", default_value = "0s", value_parser = parse_duration)]
    pub target_timeout: Duration,

    /// Whole-scan deadline, "0" (default) for no limit.
    #[arg(long = "global-timeout", default_value = "0s", value_parser = parse_duration)]
    pub global_timeout: Duration,

    /// Write found credential pairs to FILE, one per line.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Show failed attempts too, not only successes.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

fn parse_duration(raw: &str) -> Result<Duration, humantime::DurationError> {
    humantime::parse_duration(raw)
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
