// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the `credscan` binary specs: a thin wrapper
//! around `assert_cmd` so individual spec files read as a sequence of
//! `cli().args(&[...]).passes().stdout_has(...)` assertions.

use assert_cmd::Command;

/// A `Command` for the `credscan` binary, ready to have args appended.
pub fn cli() -> Command {
    Command::cargo_bin("credscan").expect("credscan binary should build")
}

/// The captured output of a finished `credscan` invocation, with chainable
/// content assertions.
pub struct Checked {
    output: std::process::Output,
}

impl Checked {
    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(stdout.contains(needle), "expected stdout to contain {needle:?}, got:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(stderr.contains(needle), "expected stderr to contain {needle:?}, got:\n{stderr}");
        self
    }
}

pub trait CommandExt {
    /// Run to completion, assert a zero exit code, and return the captured output.
    fn passes(&mut self) -> Checked;
    /// Run to completion, assert exit code `code`, and return the captured output.
    fn fails_with(&mut self, code: i32) -> Checked;
}

impl CommandExt for Command {
    fn passes(&mut self) -> Checked {
        let output = self.output().expect("spawn credscan");
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstderr: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
        Checked { output }
    }

    fn fails_with(&mut self, code: i32) -> Checked {
        let output = self.output().expect("spawn credscan");
        assert_eq!(
            output.status.code(),
            Some(code),
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        Checked { output }
    }
}
