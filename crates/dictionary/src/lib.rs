// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scan-dictionary: built-in per-service username/password lists (§6.4),
//! embedded at compile time. These are also the priority ordering consulted
//! by the credential-ordering step (§4.6 step 2, §8 property 6).

use once_cell::sync::Lazy;

fn parse_lines(raw: &'static str) -> Vec<&'static str> {
    raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

static SSH_USERS: Lazy<Vec<&'static str>> =
    Lazy::new(|| parse_lines(include_str!("dics/ssh_user.txt")));
static SSH_PASSWORDS: Lazy<Vec<&'static str>> =
    Lazy::new(|| parse_lines(include_str!("dics/ssh_pass.txt")));
static REDIS_PASSWORDS: Lazy<Vec<&'static str>> =
    Lazy::new(|| parse_lines(include_str!("dics/redis_pass.txt")));
static EMPTY_USER: Lazy<Vec<&'static str>> = Lazy::new(|| vec![""]);

/// Default username list for `service`, in priority order. Empty for
/// services with no built-in table (credential ordering then falls back to
/// the caller's input order unchanged).
pub fn default_usernames(service: &str) -> Vec<String> {
    match service {
        "ssh" => SSH_USERS.iter().map(|s| s.to_string()).collect(),
        "redis" => EMPTY_USER.iter().map(|s| s.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Default password list for `service`, in priority order.
pub fn default_passwords(service: &str) -> Vec<String> {
    match service {
        "ssh" => SSH_PASSWORDS.iter().map(|s| s.to_string()).collect(),
        "redis" => REDIS_PASSWORDS.iter().map(|s| s.to_string()).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
