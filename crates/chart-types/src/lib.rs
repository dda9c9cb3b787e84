//! Chart type definitions for the chart editor
//!
//! This crate declares the column-requirement schema a chart type imposes
//! on data groups, and the registry that resolves a chart type identifier
//! to its definition.

mod builtin;
mod definition;
mod registry;

pub use definition::{ChartDefinition, ColumnClass, ColumnRequirement};
pub use registry::{ChartTypeRegistry, DEFAULT_CHART_TYPE};
