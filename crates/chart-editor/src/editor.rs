//! Editor orchestration: chart events in, tab and widget updates out

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use chart_model::{check_groups, Chart, ChartEvent, ChartObserver, GroupId, ValidationError};
use chart_types::{ChartTypeRegistry, DEFAULT_CHART_TYPE};

use crate::host::{AppView, Host};
use crate::surface::{Operation, TabContainer, TabId, TabSpec};
use crate::widgets::{Message, MessagePanel, TitleInput, TypePickerState};

/// Title applied by the reset transition
pub const NEW_CHART_TITLE: &str = "New Chart";

/// Label for groups the user has not named yet
pub const GROUP_LABEL_PLACEHOLDER: &str = "Data label";

/// Info message shown when saving a chart with no data groups
pub const NO_GROUPS_MESSAGE: &str = "Please select data columns before drawing the chart.";

/// Danger message shown when a group has no column for a required role
pub const UNBOUND_COLUMN_MESSAGE: &str =
    "This chart type requires column types not found in your tabular file.";

/// Where the editing session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Building the configuration; the back operation is hidden
    Editing,
    /// The chart has been persisted and drawn at least once
    Rendered,
}

/// Result of one save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Validation passed; the viewer is showing and persistence is queued
    Accepted,
    /// Nothing to draw; an empty group was created and revealed instead
    NoGroups { created: GroupId },
    /// The configuration failed validation; the offending tab is shown
    Rejected(ValidationError),
}

struct EditorState {
    heading: String,
    title: TitleInput,
    picker: TypePickerState,
    messages: MessagePanel,
    phase: EditorPhase,
}

/// Drives one editing session over a chart, a tab container and a host
///
/// Construction wires the fixed tabs, subscribes to the chart once and
/// applies the reset transition, so a new editor always starts from
/// session defaults. Synchronization is one-directional: chart events
/// update editor state, user actions mutate the chart. Handlers never
/// hold the editor lock across a chart call, which keeps re-entrant
/// notification (reset, tab close) deadlock free.
pub struct Editor {
    chart: Arc<Chart>,
    registry: Arc<ChartTypeRegistry>,
    tabs: Arc<dyn TabContainer>,
    host: Arc<dyn Host>,
    dataset_id: String,
    state: RwLock<EditorState>,
}

impl Editor {
    pub fn new(
        chart: Arc<Chart>,
        registry: Arc<ChartTypeRegistry>,
        tabs: Arc<dyn TabContainer>,
        host: Arc<dyn Host>,
        dataset_id: impl Into<String>,
    ) -> Arc<Self> {
        let editor = Arc::new(Self {
            chart: Arc::clone(&chart),
            registry,
            tabs,
            host,
            dataset_id: dataset_id.into(),
            state: RwLock::new(EditorState {
                heading: String::new(),
                title: TitleInput::new(),
                picker: TypePickerState::new(),
                messages: MessagePanel::new(),
                phase: EditorPhase::Editing,
            }),
        });
        editor.tabs.add(TabSpec::fixed(TabId::start(), "Start"));
        editor.tabs.add(TabSpec::fixed(TabId::settings(), "Configuration"));
        chart.subscribe(editor.clone());
        editor.apply_reset();
        editor
    }

    // ------------------------------------------------------------------
    // User actions

    /// Apply an edit from the title field to the chart
    pub fn title_edited(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.write().title.set_value(text.clone());
        self.chart.set_title(text);
    }

    /// Switch chart type, resolving the definition through the registry
    ///
    /// Re-picking the active type is a no-op. An unknown id is degraded
    /// but not fatal: the definition becomes absent and the save gate
    /// later passes vacuously.
    pub fn pick_type(&self, type_id: impl Into<String>) {
        let type_id = type_id.into();
        if self.chart.type_id() == type_id {
            return;
        }
        let definition = self.registry.lookup(&type_id);
        match &definition {
            Some(definition) => {
                tracing::debug!("Switching chart type to '{}' ({})", type_id, definition.title)
            }
            None => tracing::warn!("Unknown chart type '{}', clearing the definition", type_id),
        }
        self.chart.set_definition(definition);
        self.chart.clear_settings();
        self.chart.set_type(type_id);
        self.chart.set_modified(true);
    }

    /// Fast-confirm gesture: switch type, then immediately save
    pub fn activate_type(&self, type_id: impl Into<String>) -> SaveOutcome {
        self.pick_type(type_id);
        self.save()
    }

    /// Create an empty data group and bring its tab to the front
    pub fn add_data(&self) -> GroupId {
        let id = self.chart.add_group();
        self.tabs.show(&TabId::group(id));
        id
    }

    /// Start the session over: clears all groups, then applies defaults
    pub fn reset(&self) {
        self.chart.reset();
    }

    /// The back operation: leave for the viewer, dropping unsaved edits
    pub fn return_to_viewer(&self) {
        self.host.navigate(AppView::Viewer);
        if let Err(error) = self.host.load_chart() {
            tracing::warn!("Failed to reload the stored chart: {}", error);
        }
    }

    /// Validate and persist the chart
    ///
    /// Widget state is snapshotted into the chart first, so the save sees
    /// exactly what the user sees. Failures leave the session intact and
    /// deposit the user on the tab that needs attention. On success the
    /// viewer shows immediately and persistence runs as a deferred job;
    /// the redraw signal fires only once storage has succeeded.
    pub fn save(&self) -> SaveOutcome {
        let (title, type_id) = {
            let state = self.state.read();
            (
                state.title.value().to_string(),
                state.picker.selected().to_string(),
            )
        };
        self.chart.set_title(title);
        self.chart.set_type(type_id);
        self.chart.touch_saved_at(Utc::now());

        if self.chart.group_count() == 0 {
            self.show_message(Message::info(NO_GROUPS_MESSAGE));
            let created = self.add_data();
            return SaveOutcome::NoGroups { created };
        }

        let groups = self.chart.groups();
        let definition = self.chart.definition();
        if let Err(error) = check_groups(&groups, definition.as_deref()) {
            self.show_message(Message::danger(UNBOUND_COLUMN_MESSAGE));
            if let ValidationError::UnboundColumn { group, .. } = &error {
                self.tabs.show(&TabId::group(*group));
            }
            return SaveOutcome::Rejected(error);
        }
        if definition.is_none() {
            tracing::warn!(
                "Saving chart type '{}' without a resolved definition",
                self.chart.type_id()
            );
        }

        self.host.navigate(AppView::Viewer);
        let chart = Arc::clone(&self.chart);
        let host = Arc::clone(&self.host);
        self.host.defer(Box::new(move || match host.save_chart() {
            Ok(()) => chart.trigger_redraw(),
            Err(error) => tracing::error!("Chart persistence failed: {}", error),
        }));
        SaveOutcome::Accepted
    }

    // ------------------------------------------------------------------
    // Reads for embedding UIs and tests

    /// Heading shown above the editor; mirrors the chart title
    pub fn heading(&self) -> String {
        self.state.read().heading.clone()
    }

    /// Current text of the title field
    pub fn title_value(&self) -> String {
        self.state.read().title.value().to_string()
    }

    /// Number of writes the title field has received
    pub fn title_revision(&self) -> u64 {
        self.state.read().title.revision()
    }

    /// Chart type id the picker has selected
    pub fn selected_type(&self) -> String {
        self.state.read().picker.selected().to_string()
    }

    /// The blocking message currently shown, if any
    pub fn message(&self) -> Option<Message> {
        self.state.read().messages.current().cloned()
    }

    /// Current session phase
    pub fn phase(&self) -> EditorPhase {
        self.state.read().phase
    }

    // ------------------------------------------------------------------
    // Event reactions

    /// The reset transition: session defaults, back hidden, Editing phase
    ///
    /// Groups are deliberately untouched; only `Chart::reset` clears them.
    fn apply_reset(&self) {
        self.chart.regenerate_id();
        self.chart.set_dataset(self.dataset_id.clone());
        self.chart.set_definition(self.registry.lookup(DEFAULT_CHART_TYPE));
        self.chart.set_type(DEFAULT_CHART_TYPE);
        self.chart.set_title(NEW_CHART_TITLE);
        self.tabs.hide_operation(Operation::Back);
        let mut state = self.state.write();
        state.messages.clear();
        state.phase = EditorPhase::Editing;
    }

    fn sync_title(&self) {
        let title = self.chart.title();
        let mut state = self.state.write();
        state.heading = title.clone();
        if state.title.value() != title {
            state.title.set_value(title);
        }
    }

    fn sync_type(&self) {
        let type_id = self.chart.type_id();
        let mut state = self.state.write();
        if state.picker.selected() != type_id {
            state.picker.select(type_id);
        }
    }

    fn enter_rendered(&self) {
        self.tabs.show_operation(Operation::Back);
        self.state.write().phase = EditorPhase::Rendered;
    }

    fn attach_group_tab(&self, id: GroupId) {
        let chart = Arc::clone(&self.chart);
        self.tabs.add(TabSpec::removable(TabId::group(id), move || {
            chart.remove_group(id);
        }));
        self.refresh_group_labels();
        self.chart.set_modified(true);
    }

    fn detach_group_tab(&self, id: GroupId) {
        self.tabs.remove(&TabId::group(id));
        self.refresh_group_labels();
        self.chart.set_modified(true);
    }

    /// Re-derive every group tab title from display position and key
    fn refresh_group_labels(&self) {
        for (position, group) in self.chart.groups().iter().enumerate() {
            let label = format!("{}: {}", position + 1, group.label_or(GROUP_LABEL_PLACEHOLDER));
            self.tabs.set_title(&TabId::group(group.id), &label);
        }
    }

    fn show_message(&self, message: Message) {
        self.state.write().messages.show(message);
    }
}

impl ChartObserver for Editor {
    fn on_chart_event(&self, event: &ChartEvent) {
        match event {
            ChartEvent::TitleChanged => self.sync_title(),
            ChartEvent::TypeChanged => self.sync_type(),
            ChartEvent::Reset => self.apply_reset(),
            ChartEvent::Redraw => self.enter_rendered(),
            ChartEvent::GroupAdded(id) => self.attach_group_tab(*id),
            ChartEvent::GroupRemoved(id) => self.detach_group_tab(*id),
            ChartEvent::GroupsReset => self.tabs.remove_removable(),
            ChartEvent::GroupKeyChanged(_) => self.refresh_group_labels(),
        }
    }
}
