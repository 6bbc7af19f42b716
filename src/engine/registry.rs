//! Engine registry
//!
//! Name-based discovery of recovery engines. Discovery only: running
//! engines, scheduling, and conflict resolution stay with the host.

use crate::engine::RecoveryEngine;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of recovery engines keyed by name
#[derive(Clone, Default)]
pub struct EngineRegistry {
    /// Map of engine name to engine
    engines: HashMap<String, Arc<dyn RecoveryEngine>>,
}

impl EngineRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an engine under its own name
    ///
    /// A later registration with the same name replaces the earlier one.
    pub fn register(&mut self, engine: Arc<dyn RecoveryEngine>) {
        self.engines.insert(engine.name().to_string(), engine);
    }

    /// Get an engine by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn RecoveryEngine>> {
        self.engines.get(name).cloned()
    }

    /// Check if an engine is registered
    pub fn contains(&self, name: &str) -> bool {
        self.engines.contains_key(name)
    }

    /// Get all registered engine names
    pub fn engine_names(&self) -> Vec<String> {
        self.engines.keys().cloned().collect()
    }

    /// Action kinds advertised by a registered engine
    pub fn actions(&self, name: &str) -> Option<Vec<String>> {
        self.engines.get(name).map(|e| e.recovery_actions())
    }

    /// Get total number of registered engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
