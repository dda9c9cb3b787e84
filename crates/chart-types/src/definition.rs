//! Column-requirement schemas declared by chart types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The kind of dataset column a semantic role accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnClass {
    /// Numeric measurements (axis values, magnitudes)
    Numeric,
    /// Textual labels (categories, tick names)
    Label,
    /// Any column qualifies
    Any,
}

impl ColumnClass {
    /// Whether a dataset column of class `other` satisfies this role
    pub fn accepts(&self, other: ColumnClass) -> bool {
        matches!(self, ColumnClass::Any) || *self == other
    }
}

/// Requirement a chart type places on one semantic column role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRequirement {
    /// User-facing description of the role, e.g. "Values for y-axis"
    pub label: String,
    /// The column class this role accepts
    pub class: ColumnClass,
    /// Advisory for column pickers; the save gate only rejects bindings
    /// explicitly marked unavailable, never roles a group has not recorded
    #[serde(default)]
    pub optional: bool,
}

impl ColumnRequirement {
    /// Create a required role accepting the given column class
    pub fn new(label: impl Into<String>, class: ColumnClass) -> Self {
        Self {
            label: label.into(),
            class,
            optional: false,
        }
    }

    /// Mark this role as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Schema for one chart type
///
/// Identity and picker grouping, plus the semantic column roles a data
/// group must fill before the chart can be drawn. Column insertion order
/// is both picker order and validation report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    /// Stable type identifier, e.g. `bar`
    pub id: String,
    /// Display name
    pub title: String,
    /// Picker category, e.g. "Bar charts"
    pub category: String,
    /// One-line description shown alongside the title
    #[serde(default)]
    pub description: String,
    /// Semantic column roles, keyed by role name
    pub columns: IndexMap<String, ColumnRequirement>,
    /// Seed values for the per-type settings bag
    #[serde(default)]
    pub default_settings: IndexMap<String, serde_json::Value>,
}

impl ChartDefinition {
    /// Create a definition with no columns or settings
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            description: String::new(),
            columns: IndexMap::new(),
            default_settings: IndexMap::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a column role; ordering follows call order
    pub fn with_column(mut self, role: impl Into<String>, requirement: ColumnRequirement) -> Self {
        self.columns.insert(role.into(), requirement);
        self
    }

    /// Seed a default setting
    pub fn with_setting(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.default_settings.insert(key.into(), value.into());
        self
    }

    /// Roles that must be bound, in declaration order
    pub fn required_roles(&self) -> impl Iterator<Item = (&str, &ColumnRequirement)> {
        self.columns
            .iter()
            .filter(|(_, req)| !req.optional)
            .map(|(role, req)| (role.as_str(), req))
    }
}
