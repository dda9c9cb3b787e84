//! The observable chart aggregate

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chart_types::ChartDefinition;

use crate::binding::ColumnBinding;
use crate::group::{Group, GroupId};

/// Unique identifier for a chart
pub type ChartId = Uuid;

/// Named change notifications the chart publishes
///
/// This is the complete set. Mutations with no variant here (dataset id,
/// modified flag, settings, bindings, id regeneration, save timestamp)
/// are silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEvent {
    /// The title text changed
    TitleChanged,
    /// The chart type id changed
    TypeChanged,
    /// Bulk reset: groups were cleared and the editing session restarts
    Reset,
    /// The chart has been persisted and is ready to render
    Redraw,
    /// A group joined the collection
    GroupAdded(GroupId),
    /// A group left the collection
    GroupRemoved(GroupId),
    /// The whole group collection was cleared at once
    GroupsReset,
    /// A group's user-facing key changed
    GroupKeyChanged(GroupId),
}

/// Trait for components that react to chart changes
pub trait ChartObserver: Send + Sync {
    /// Called after each mutation, with the model locks released
    fn on_chart_event(&self, event: &ChartEvent);
}

/// Serializable snapshot of the chart state
///
/// The resolved definition is omitted: it is re-derivable from the type
/// registry on load. Hosts persist this; the save gate validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub id: ChartId,
    pub type_id: String,
    pub title: String,
    pub dataset_id: String,
    #[serde(default)]
    pub modified: bool,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settings: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Chart state guarded by the model lock
struct ChartState {
    id: ChartId,
    type_id: String,
    title: String,
    dataset_id: String,
    modified: bool,
    saved_at: Option<DateTime<Utc>>,
    definition: Option<Arc<ChartDefinition>>,
    settings: IndexMap<String, serde_json::Value>,
    groups: IndexMap<GroupId, Group>,
}

/// The aggregate editable entity: scalar metadata plus an ordered, keyed
/// collection of data groups
///
/// One chart exists per editing session; it is mutated in place and never
/// replaced. Every mutation is unconditionally accepted, so the user may
/// leave the configuration invalid mid-edit; correctness is enforced
/// once, at the save gate.
pub struct Chart {
    state: RwLock<ChartState>,
    observers: RwLock<Vec<Weak<dyn ChartObserver>>>,
}

impl Chart {
    /// Create a chart for the given source dataset
    ///
    /// Scalar fields start empty; the editor's reset transition supplies
    /// the session defaults (and thereby fires the first notifications).
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(ChartState {
                id: Uuid::new_v4(),
                type_id: String::new(),
                title: String::new(),
                dataset_id: dataset_id.into(),
                modified: false,
                saved_at: None,
                definition: None,
                settings: IndexMap::new(),
                groups: IndexMap::new(),
            }),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer; held weakly, pruned once dropped
    pub fn subscribe(&self, observer: Arc<dyn ChartObserver>) {
        self.observers.write().push(Arc::downgrade(&observer));
    }

    /// Deliver an event to live observers
    ///
    /// Observers are upgraded first and dispatched with both locks
    /// released, so a handler may mutate the chart (and re-enter here).
    fn notify(&self, event: ChartEvent) {
        let live: Vec<Arc<dyn ChartObserver>> = {
            let mut observers = self.observers.write();
            observers.retain(|weak| weak.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in live {
            observer.on_chart_event(&event);
        }
    }

    // ------------------------------------------------------------------
    // Scalar mutation

    /// Set the title, notifying on actual change
    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        let changed = {
            let mut state = self.state.write();
            if state.title == title {
                false
            } else {
                state.title = title;
                true
            }
        };
        if changed {
            self.notify(ChartEvent::TitleChanged);
        }
    }

    /// Set the chart type id, notifying on actual change
    pub fn set_type(&self, type_id: impl Into<String>) {
        let type_id = type_id.into();
        let changed = {
            let mut state = self.state.write();
            if state.type_id == type_id {
                false
            } else {
                state.type_id = type_id;
                true
            }
        };
        if changed {
            self.notify(ChartEvent::TypeChanged);
        }
    }

    /// Replace the resolved column-requirement schema (silent)
    pub fn set_definition(&self, definition: Option<Arc<ChartDefinition>>) {
        self.state.write().definition = definition;
    }

    /// Set the modified flag (silent; consumed for operation visibility)
    pub fn set_modified(&self, modified: bool) {
        self.state.write().modified = modified;
    }

    /// Re-point the chart at a dataset (silent; fixed per session)
    pub fn set_dataset(&self, dataset_id: impl Into<String>) {
        self.state.write().dataset_id = dataset_id.into();
    }

    /// Assign a fresh id, returning it (silent)
    pub fn regenerate_id(&self) -> ChartId {
        let id = Uuid::new_v4();
        self.state.write().id = id;
        id
    }

    /// Record the save-attempt timestamp (silent)
    pub fn touch_saved_at(&self, at: DateTime<Utc>) {
        self.state.write().saved_at = Some(at);
    }

    /// Store one per-type setting value (silent)
    pub fn set_setting(&self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.state.write().settings.insert(key.into(), value.into());
    }

    /// Drop all per-type settings (silent; used on type switch)
    pub fn clear_settings(&self) {
        self.state.write().settings.clear();
    }

    /// Announce that the chart has been persisted and is renderable
    pub fn trigger_redraw(&self) {
        self.notify(ChartEvent::Redraw);
    }

    /// Full reset: clear all groups, then announce the session restart
    ///
    /// Field defaults are the editor's reset-transition policy and are
    /// applied by the `Reset` handler, not here.
    pub fn reset(&self) {
        self.reset_groups();
        self.notify(ChartEvent::Reset);
    }

    // ------------------------------------------------------------------
    // Group collection

    /// Create and insert an empty group, returning its id
    pub fn add_group(&self) -> GroupId {
        self.insert_group(Group::new())
    }

    /// Insert a prepared group (host restore path), returning its id
    pub fn insert_group(&self, group: Group) -> GroupId {
        let id = group.id;
        self.state.write().groups.insert(id, group);
        self.notify(ChartEvent::GroupAdded(id));
        id
    }

    /// Remove a group, preserving the display order of the rest
    pub fn remove_group(&self, id: GroupId) -> Option<Group> {
        let removed = self.state.write().groups.shift_remove(&id);
        if removed.is_some() {
            self.notify(ChartEvent::GroupRemoved(id));
        }
        removed
    }

    /// Clear the whole collection with a single notification
    pub fn reset_groups(&self) {
        self.state.write().groups.clear();
        self.notify(ChartEvent::GroupsReset);
    }

    /// Set a group's user-facing key, notifying on actual change
    pub fn set_group_key(&self, id: GroupId, key: impl Into<String>) -> bool {
        let key = key.into();
        let changed = {
            let mut state = self.state.write();
            match state.groups.get_mut(&id) {
                Some(group) if group.key != key => {
                    group.key = key;
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.notify(ChartEvent::GroupKeyChanged(id));
        }
        changed
    }

    /// Record a column binding on a group (silent)
    pub fn bind_group_column(
        &self,
        id: GroupId,
        role: impl Into<String>,
        binding: impl Into<ColumnBinding>,
    ) -> bool {
        let mut state = self.state.write();
        match state.groups.get_mut(&id) {
            Some(group) => {
                group.bindings.insert(role.into(), binding.into());
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Reads

    /// Current chart id
    pub fn id(&self) -> ChartId {
        self.state.read().id
    }

    /// Current chart type id
    pub fn type_id(&self) -> String {
        self.state.read().type_id.clone()
    }

    /// Current title text
    pub fn title(&self) -> String {
        self.state.read().title.clone()
    }

    /// The session's source dataset id
    pub fn dataset_id(&self) -> String {
        self.state.read().dataset_id.clone()
    }

    /// Whether the chart changed since the last save/reset bookkeeping
    pub fn modified(&self) -> bool {
        self.state.read().modified
    }

    /// Timestamp of the most recent save attempt
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().saved_at
    }

    /// The resolved column-requirement schema for the current type
    pub fn definition(&self) -> Option<Arc<ChartDefinition>> {
        self.state.read().definition.clone()
    }

    /// One per-type setting value
    pub fn setting(&self, key: &str) -> Option<serde_json::Value> {
        self.state.read().settings.get(key).cloned()
    }

    /// One group by id
    pub fn group(&self, id: GroupId) -> Option<Group> {
        self.state.read().groups.get(&id).cloned()
    }

    /// All groups in display (insertion) order
    pub fn groups(&self) -> Vec<Group> {
        self.state.read().groups.values().cloned().collect()
    }

    /// Group ids in display order
    pub fn group_ids(&self) -> Vec<GroupId> {
        self.state.read().groups.keys().copied().collect()
    }

    /// 0-based display position of a group
    pub fn group_position(&self, id: GroupId) -> Option<usize> {
        self.state.read().groups.get_index_of(&id)
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.state.read().groups.len()
    }

    /// Serializable snapshot of the full state
    pub fn data(&self) -> ChartData {
        let state = self.state.read();
        ChartData {
            id: state.id,
            type_id: state.type_id.clone(),
            title: state.title.clone(),
            dataset_id: state.dataset_id.clone(),
            modified: state.modified,
            saved_at: state.saved_at,
            settings: state.settings.clone(),
            groups: state.groups.values().cloned().collect(),
        }
    }
}
