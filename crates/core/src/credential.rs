// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential pair and password templating (§3, §4.6 step 5).

use serde::{Deserialize, Serialize};

/// A `(username, password)` pair. `("", "")` is reserved to mean "probe
/// unauthenticated access".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// The special `("", "")` unit that detects unauthenticated access.
    pub fn unauthenticated() -> Self {
        Self::new("", "")
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

/// Apply password templating (§4.6 step 5): `%user%` becomes the literal
/// username, `%upper-user%` becomes the username with its first character
/// upper-cased. Applied at submission time, never inside a probe.
pub fn apply_password_template(password: &str, username: &str) -> String {
    let password = password.replace("%user%", username);
    if password.contains("%upper-user%") {
        password.replace("%upper-user%", &capitalize_first(username))
    } else {
        password
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
