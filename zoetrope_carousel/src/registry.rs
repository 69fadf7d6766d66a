// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bootstrap-time registration of carousel definitions.
//!
//! Instead of a process-global element registry populated as an import side
//! effect, applications create a [`ComponentRegistry`] during bootstrap,
//! register each carousel flavor exactly once under a name, and look the
//! defaults up when instantiating an instance for a host element.

use alloc::string::{String, ToString};
use core::fmt;

use hashbrown::HashMap;

use crate::config::CarouselConfig;

/// Error returned when a definition name is registered twice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateDefinition {
    name: String,
}

impl DuplicateDefinition {
    /// The name that was already taken.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DuplicateDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "carousel definition {:?} is already registered", self.name)
    }
}

impl core::error::Error for DuplicateDefinition {}

/// Named carousel definitions with their default configurations.
#[derive(Clone, Debug, Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, CarouselConfig>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `defaults` under `name`.
    ///
    /// Names are registered once; a second registration under the same name
    /// is rejected rather than silently replacing the first.
    pub fn register(
        &mut self,
        name: &str,
        defaults: CarouselConfig,
    ) -> Result<(), DuplicateDefinition> {
        if self.entries.contains_key(name) {
            return Err(DuplicateDefinition {
                name: name.to_string(),
            });
        }
        self.entries.insert(name.to_string(), defaults);
        Ok(())
    }

    /// Returns `true` if `name` has been registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The default configuration registered under `name`.
    #[must_use]
    pub fn defaults(&self, name: &str) -> Option<&CarouselConfig> {
        self.entries.get(name)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
