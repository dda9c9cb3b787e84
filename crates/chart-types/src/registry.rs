//! Registry resolving chart type identifiers to their definitions

use std::sync::Arc;

use ahash::AHashMap;

use crate::definition::ChartDefinition;

/// The chart type every reset reverts to
pub const DEFAULT_CHART_TYPE: &str = "bar";

/// Registry of chart type definitions, keyed by type id
///
/// Lookups are O(1); registration order is preserved so pickers can list
/// types stably.
pub struct ChartTypeRegistry {
    index: AHashMap<String, Arc<ChartDefinition>>,
    order: Vec<String>,
}

impl ChartTypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry preloaded with the built-in chart types
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::builtin::install(&mut registry);
        registry
    }

    /// Insert or replace a definition
    ///
    /// Replacing keeps the original registration position.
    pub fn register(&mut self, definition: ChartDefinition) -> Arc<ChartDefinition> {
        let definition = Arc::new(definition);
        let id = definition.id.clone();
        if self.index.insert(id.clone(), Arc::clone(&definition)).is_none() {
            self.order.push(id);
        }
        definition
    }

    /// Resolve a type id to its definition; unknown ids yield `None`
    pub fn lookup(&self, id: &str) -> Option<Arc<ChartDefinition>> {
        self.index.get(id).cloned()
    }

    /// Whether the registry knows the given type id
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = Arc<ChartDefinition>> + '_ {
        self.order.iter().filter_map(|id| self.lookup(id))
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ChartTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
