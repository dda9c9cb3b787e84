//! Observable chart/group domain model for the chart editor
//!
//! The chart is a shared, interior-mutable aggregate that publishes a
//! fixed set of change notifications. Mutation is always accepted;
//! correctness is enforced once, at the save gate in [`validate`].

mod binding;
mod chart;
mod group;
pub mod validate;

pub use binding::ColumnBinding;
pub use chart::{Chart, ChartData, ChartEvent, ChartId, ChartObserver};
pub use group::{Group, GroupId};
pub use validate::{check_groups, ValidationError};
