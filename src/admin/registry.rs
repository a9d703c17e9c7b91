//! Per-operation outcome tables for the fake administration client.
//!
//! Each [`RetTable`] maps a target key ("host:port" or a node id) to the
//! outcome one operation returns for that key. Keys are matched exactly as
//! supplied; there is no normalization or wildcard matching.

use crate::error::{AdminError, Result};

use std::collections::HashMap;
use tracing::{debug, trace};

/// What a lookup does for a key with no configured outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Return the operation's zero-effect default (`Ok` with an empty payload).
    #[default]
    Lenient,
    /// Fail with [`AdminError::Unconfigured`].
    Strict,
}

/// Configured outcomes of a single operation, keyed by target.
#[derive(Debug, Clone)]
pub struct RetTable<T> {
    operation: &'static str,
    entries: HashMap<String, Result<T>>,
}

impl<T> RetTable<T> {
    /// Create an empty table for `operation`.
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            entries: HashMap::new(),
        }
    }

    /// Name of the operation this table answers for.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Configure the outcome for `key`, returning the one it replaces.
    pub fn insert(&mut self, key: impl Into<String>, outcome: Result<T>) -> Option<Result<T>> {
        self.entries.insert(key.into(), outcome)
    }

    /// Configure a successful outcome for `key`.
    pub fn set_ok(&mut self, key: impl Into<String>, payload: T) {
        self.insert(key, Ok(payload));
    }

    /// Configure a failing outcome for `key`.
    pub fn set_err(&mut self, key: impl Into<String>, err: AdminError) {
        self.insert(key, Err(err));
    }

    pub fn get(&self, key: &str) -> Option<&Result<T>> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Result<T>> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Configured keys, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T: Clone + Default> RetTable<T> {
    /// Resolve the outcome for `key`.
    ///
    /// A configured outcome is returned as-is. An absent key yields
    /// `Ok(T::default())` in lenient mode and [`AdminError::Unconfigured`]
    /// in strict mode.
    pub fn lookup(&self, key: &str, mode: LookupMode) -> Result<T> {
        if let Some(outcome) = self.entries.get(key) {
            trace!(operation = self.operation, key, configured = true, "fake admin lookup");
            return outcome.clone();
        }
        match mode {
            LookupMode::Lenient => {
                trace!(operation = self.operation, key, configured = false, "fake admin lookup");
                Ok(T::default())
            }
            LookupMode::Strict => {
                debug!(operation = self.operation, key, "no outcome configured");
                Err(AdminError::Unconfigured {
                    operation: self.operation,
                    key: key.to_string(),
                })
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────
