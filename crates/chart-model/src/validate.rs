//! Save-gate validation for group column bindings

use thiserror::Error;

use chart_types::ChartDefinition;

use crate::binding::ColumnBinding;
use crate::group::{Group, GroupId};

/// Reasons a chart configuration cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The chart has nothing to draw
    #[error("no data groups are defined")]
    NoGroups,

    /// A group carries a role whose column slot is explicitly unavailable
    #[error("data group {position} has no column available for role '{role}'")]
    UnboundColumn {
        group: GroupId,
        /// 1-based display position of the offending group
        position: usize,
        role: String,
    },
}

/// Check every group against the active column-requirement schema
///
/// Groups are scanned in display order and roles in definition order;
/// the first explicitly-unavailable binding stops the scan. A role the
/// group has never touched is not an error here; only a recorded
/// `Unavailable` marks a requirement the dataset cannot satisfy. With
/// no definition resolved there is nothing to check against and the
/// gate passes.
pub fn check_groups(
    groups: &[Group],
    definition: Option<&ChartDefinition>,
) -> Result<(), ValidationError> {
    if groups.is_empty() {
        return Err(ValidationError::NoGroups);
    }
    let Some(definition) = definition else {
        return Ok(());
    };
    for (index, group) in groups.iter().enumerate() {
        for role in definition.columns.keys() {
            if matches!(group.binding(role), Some(ColumnBinding::Unavailable)) {
                return Err(ValidationError::UnboundColumn {
                    group: group.id,
                    position: index + 1,
                    role: role.clone(),
                });
            }
        }
    }
    Ok(())
}
