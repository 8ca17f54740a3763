// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin Registry (C1, §4.1): `service_name → HostProbe`, populated once at
//! setup and read-shared for the rest of the scan's lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use scan_probes::HostProbe;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("probe already registered for service: {0}")]
    AlreadyRegistered(String),
}

/// Maps service names to probe implementations. Registration happens during
/// a defined setup phase; after that the registry is only read, from any
/// number of workers concurrently.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    probes: HashMap<String, Arc<dyn HostProbe>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a probe under `name`. Idempotent-by-name: registering the
    /// same name twice is an error, not a silent replace.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        probe: Arc<dyn HostProbe>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.probes.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.probes.insert(name, probe);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn HostProbe>> {
        self.probes.get(name).cloned()
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.probes.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
