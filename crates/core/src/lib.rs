// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scan-core: data model and shared utilities for the credential audit scan engine.
//!
//! Everything here is pure and engine-agnostic: target parsing, credential
//! templating and ordering, the probe request/result types, and the
//! completion error taxonomy. No I/O, no networking, no process lives here.

pub mod macros;

pub mod credential;
pub mod error;
pub mod ordering;
pub mod request;
pub mod result;
pub mod target;

pub use credential::{apply_password_template, Credential};
pub use error::CompletionError;
pub use ordering::reorder_with_priority;
pub use request::ProbeRequest;
pub use result::{ProbeOutcome, ProbeResult};
pub use target::{default_port, Target, TargetParseError};
