//! Alias registration for renamed types.
//!
//! Aliases are registered once, when a type is declared, and read while
//! schemas are generated. The registry guards its table with a lock so
//! registration may happen lazily from several threads.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock};

use crate::descriptor::TypeDescriptor;
use crate::reflect::Describe;

#[derive(Debug, Default)]
pub struct AliasRegistry {
    aliases: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `aliases` to the set registered for `fqn`. Repeats are ignored.
    pub fn register<I, S>(&self, fqn: &str, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = self.aliases.write().unwrap_or_else(PoisonError::into_inner);
        let entry = table.entry(fqn.to_string()).or_default();
        for alias in aliases {
            entry.insert(alias.into());
        }
        tracing::debug!(fqn, count = entry.len(), "registered type aliases");
    }

    /// Register aliases for the named type described by `T`.
    ///
    /// Types without a declared name (containers, unions) are ignored.
    pub fn register_type<T, I, S>(&self, aliases: I)
    where
        T: Describe + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register_descriptor(&T::describe(), aliases);
    }

    pub fn register_descriptor<I, S>(&self, descriptor: &TypeDescriptor, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match descriptor.type_name() {
            Some(name) => self.register(&name.fqn(), aliases),
            None => tracing::warn!(%descriptor, "cannot register aliases for an unnamed type"),
        }
    }

    /// Aliases registered for `fqn`, sorted; empty when there are none.
    pub fn get(&self, fqn: &str) -> Vec<String> {
        let table = self.aliases.read().unwrap_or_else(PoisonError::into_inner);
        table
            .get(fqn)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for AliasRegistry {
    fn from(value: HashMap<String, Vec<String>>) -> Self {
        let registry = AliasRegistry::new();
        for (fqn, aliases) in value {
            registry.register(&fqn, aliases);
        }
        registry
    }
}
