//! Column binding values for data group roles

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value bound to one semantic column role of a data group
///
/// Replaces the legacy `"__null__"` magic string with a tagged value, so
/// a real dataset column can never be mistaken for "nothing to bind".
/// The legacy token survives only in the serde representation, keeping
/// stored charts from the string-based format readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ColumnBinding {
    /// A dataset column identifier
    Bound(String),
    /// No compatible dataset column could be offered for this role
    Unavailable,
}

impl ColumnBinding {
    /// Reserved wire token meaning "no column available"
    pub const UNAVAILABLE_TOKEN: &'static str = "__null__";

    /// Bind a dataset column by identifier
    pub fn bound(column: impl Into<String>) -> Self {
        ColumnBinding::Bound(column.into())
    }

    /// Whether this binding is the unavailable marker
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ColumnBinding::Unavailable)
    }

    /// The bound column identifier, if any
    pub fn column(&self) -> Option<&str> {
        match self {
            ColumnBinding::Bound(column) => Some(column),
            ColumnBinding::Unavailable => None,
        }
    }
}

impl From<String> for ColumnBinding {
    fn from(value: String) -> Self {
        if value == Self::UNAVAILABLE_TOKEN {
            ColumnBinding::Unavailable
        } else {
            ColumnBinding::Bound(value)
        }
    }
}

impl From<&str> for ColumnBinding {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<ColumnBinding> for String {
    fn from(binding: ColumnBinding) -> Self {
        match binding {
            ColumnBinding::Bound(column) => column,
            ColumnBinding::Unavailable => ColumnBinding::UNAVAILABLE_TOKEN.to_owned(),
        }
    }
}

impl fmt::Display for ColumnBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnBinding::Bound(column) => f.write_str(column),
            ColumnBinding::Unavailable => f.write_str(Self::UNAVAILABLE_TOKEN),
        }
    }
}
