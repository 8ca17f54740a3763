// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration (§6.1). A plain struct built by the CLI from parsed
//! flags — there is no config file format.

use std::time::Duration;

/// `0` for either deadline field means "auto": `per_target_deadline` is
/// computed per §4.5's formula, `global_deadline` is effectively unbounded.
#[derive(Debug, Clone)]
pub struct Config {
    pub concurrency: usize,
    pub rate_per_second: u32,
    pub per_attempt_timeout: Duration,
    pub retries: u32,
    pub per_target_deadline: Duration,
    pub global_deadline: Duration,
    pub exhaustive: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: 25,
            rate_per_second: 150,
            per_attempt_timeout: Duration::from_secs(10),
            retries: 2,
            per_target_deadline: Duration::ZERO,
            global_deadline: Duration::ZERO,
            exhaustive: false,
            verbose: false,
        }
    }
}
