//! Data groups: one binding of dataset columns to a chart's column roles

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::binding::ColumnBinding;

/// Unique identifier for a data group
pub type GroupId = Uuid;

/// One user-defined binding of dataset columns to the chart's semantic
/// column roles
///
/// The binding map is keyed by role name from the chart type's column
/// schema. A group created under one chart type keeps its bindings when
/// the type changes; any mismatch is caught at save time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier, generated at creation
    pub id: GroupId,
    /// User-facing label; empty is valid and rendered as a placeholder
    #[serde(default)]
    pub key: String,
    /// Role name → bound dataset column (or the unavailable marker)
    #[serde(default)]
    pub bindings: IndexMap<String, ColumnBinding>,
}

impl Group {
    /// Create an empty group with a fresh id
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            key: String::new(),
            bindings: IndexMap::new(),
        }
    }

    /// Create a group with the given label
    pub fn with_key(key: impl Into<String>) -> Self {
        let mut group = Self::new();
        group.key = key.into();
        group
    }

    /// Record a binding for a role; chainable for test and host setup
    pub fn bind(mut self, role: impl Into<String>, binding: impl Into<ColumnBinding>) -> Self {
        self.bindings.insert(role.into(), binding.into());
        self
    }

    /// The binding recorded for a role, if any
    pub fn binding(&self, role: &str) -> Option<&ColumnBinding> {
        self.bindings.get(role)
    }

    /// The label, or the placeholder when it is empty
    pub fn label_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.key.is_empty() {
            placeholder
        } else {
            &self.key
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}
