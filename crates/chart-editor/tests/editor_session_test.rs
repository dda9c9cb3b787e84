//! Editor construction, widget synchronization and tab lifecycle.

mod common;

use std::sync::Arc;

use chart_editor::{
    AppView, Editor, EditorPhase, Operation, TabId, GROUP_LABEL_PLACEHOLDER, NEW_CHART_TITLE,
};
use chart_model::Chart;
use chart_types::{ChartTypeRegistry, DEFAULT_CHART_TYPE};

use common::{rig, FakeHost, FakeTabs, DATASET};

#[test]
fn test_construction_applies_session_defaults() {
    let rig = rig();

    assert_eq!(rig.editor.heading(), NEW_CHART_TITLE);
    assert_eq!(rig.editor.title_value(), NEW_CHART_TITLE);
    assert_eq!(rig.editor.selected_type(), DEFAULT_CHART_TYPE);
    assert_eq!(rig.editor.phase(), EditorPhase::Editing);
    assert!(rig.editor.message().is_none());

    assert_eq!(rig.chart.type_id(), DEFAULT_CHART_TYPE);
    assert_eq!(rig.chart.title(), NEW_CHART_TITLE);
    assert_eq!(rig.chart.dataset_id(), DATASET);
    assert!(rig.chart.definition().is_some());

    assert!(rig.tabs.contains(&TabId::start()));
    assert!(rig.tabs.contains(&TabId::settings()));
    assert_eq!(rig.tabs.removable_count(), 0);
    assert!(!rig.tabs.operation_visible(Operation::Back));
}

#[test]
fn test_construction_preserves_existing_groups() {
    // The reset transition applies field defaults only; groups predating
    // the editor survive it (and get no tabs retroactively).
    let chart = Arc::new(Chart::new(DATASET));
    chart.add_group();
    let id_before = chart.id();

    let tabs = FakeTabs::new();
    let host = FakeHost::new();
    let editor = Editor::new(
        Arc::clone(&chart),
        Arc::new(ChartTypeRegistry::builtin()),
        tabs.clone(),
        host.clone(),
        DATASET,
    );

    assert_eq!(chart.group_count(), 1);
    assert_ne!(chart.id(), id_before);
    assert_eq!(editor.heading(), NEW_CHART_TITLE);
    assert_eq!(tabs.removable_count(), 0);
}

#[test]
fn test_title_edit_reaches_chart_and_heading() {
    let rig = rig();
    let revision_before = rig.editor.title_revision();

    rig.editor.title_edited("Read depth");

    assert_eq!(rig.chart.title(), "Read depth");
    assert_eq!(rig.editor.heading(), "Read depth");
    // One write from the edit itself; the change event echo must not
    // rewrite a field that already matches.
    assert_eq!(rig.editor.title_revision(), revision_before + 1);
}

#[test]
fn test_model_title_change_refreshes_field_once() {
    let rig = rig();
    let revision_before = rig.editor.title_revision();

    rig.chart.set_title("Renamed elsewhere");
    assert_eq!(rig.editor.title_value(), "Renamed elsewhere");
    assert_eq!(rig.editor.title_revision(), revision_before + 1);

    // Same value again: no event, no write.
    rig.chart.set_title("Renamed elsewhere");
    assert_eq!(rig.editor.title_revision(), revision_before + 1);
}

#[test]
fn test_pick_type_syncs_picker_and_clears_settings() {
    let rig = rig();
    rig.chart.set_setting("bins", 10);

    rig.editor.pick_type("scatter");

    assert_eq!(rig.editor.selected_type(), "scatter");
    assert_eq!(rig.chart.type_id(), "scatter");
    let definition = rig.chart.definition();
    assert_eq!(definition.map(|d| d.id.clone()).as_deref(), Some("scatter"));
    assert!(rig.chart.setting("bins").is_none());
    assert!(rig.chart.modified());
}

#[test]
fn test_repicking_active_type_is_a_noop() {
    let rig = rig();
    rig.chart.set_setting("bins", 10);

    rig.editor.pick_type(DEFAULT_CHART_TYPE);

    assert_eq!(rig.chart.setting("bins"), Some(serde_json::json!(10)));
    assert!(!rig.chart.modified());
}

#[test]
fn test_unknown_type_clears_definition() {
    let rig = rig();

    rig.editor.pick_type("sunburst");

    assert_eq!(rig.editor.selected_type(), "sunburst");
    assert_eq!(rig.chart.type_id(), "sunburst");
    assert!(rig.chart.definition().is_none());
}

#[test]
fn test_add_data_creates_and_reveals_group_tab() {
    let rig = rig();

    let id = rig.editor.add_data();

    let tab = TabId::group(id);
    assert!(rig.tabs.contains(&tab));
    assert_eq!(rig.tabs.active(), Some(tab.clone()));
    assert_eq!(
        rig.tabs.title_of(&tab),
        Some(format!("1: {}", GROUP_LABEL_PLACEHOLDER))
    );
    assert!(rig.chart.modified());
}

#[test]
fn test_group_labels_follow_keys_and_positions() {
    let rig = rig();
    let first = rig.editor.add_data();
    let _second = rig.editor.add_data();

    rig.chart.set_group_key(first, "Primary");

    assert_eq!(
        rig.tabs.removable_titles(),
        vec![
            "1: Primary".to_string(),
            format!("2: {}", GROUP_LABEL_PLACEHOLDER)
        ]
    );
}

#[test]
fn test_removing_middle_group_shifts_labels_down() {
    let rig = rig();
    let a = rig.editor.add_data();
    let b = rig.editor.add_data();
    let c = rig.editor.add_data();
    rig.chart.set_group_key(a, "Alpha");
    rig.chart.set_group_key(b, "Beta");
    rig.chart.set_group_key(c, "Gamma");

    rig.chart.remove_group(b);

    assert!(!rig.tabs.contains(&TabId::group(b)));
    assert_eq!(
        rig.tabs.removable_titles(),
        vec!["1: Alpha".to_string(), "2: Gamma".to_string()]
    );
}

#[test]
fn test_closing_group_tab_removes_its_group() {
    let rig = rig();
    let id = rig.editor.add_data();
    rig.chart.set_modified(false);

    rig.tabs.close_tab(&TabId::group(id));

    assert_eq!(rig.chart.group_count(), 0);
    assert!(!rig.tabs.contains(&TabId::group(id)));
    assert_eq!(rig.tabs.removable_count(), 0);
    assert!(rig.chart.modified());
    // The fixed tabs never go away with the groups.
    assert!(rig.tabs.contains(&TabId::start()));
    assert!(rig.tabs.contains(&TabId::settings()));
}

#[test]
fn test_reset_restores_defaults_and_drops_group_tabs() {
    let rig = rig();
    rig.editor.title_edited("Custom title");
    rig.editor.pick_type("line");
    rig.editor.add_data();
    rig.editor.add_data();
    let id_before = rig.chart.id();
    rig.chart.trigger_redraw();
    assert!(rig.tabs.operation_visible(Operation::Back));

    rig.editor.reset();

    assert_eq!(rig.editor.heading(), NEW_CHART_TITLE);
    assert_eq!(rig.editor.selected_type(), DEFAULT_CHART_TYPE);
    assert_eq!(rig.editor.phase(), EditorPhase::Editing);
    assert_eq!(rig.chart.group_count(), 0);
    assert_eq!(rig.tabs.removable_count(), 0);
    assert!(rig.tabs.contains(&TabId::start()));
    assert!(rig.tabs.contains(&TabId::settings()));
    assert!(!rig.tabs.operation_visible(Operation::Back));
    assert_ne!(rig.chart.id(), id_before);
}

#[test]
fn test_reset_leaves_modified_flag_untouched() {
    let rig = rig();
    rig.editor.add_data();
    assert!(rig.chart.modified());

    rig.editor.reset();

    assert!(rig.chart.modified());
}

#[test]
fn test_redraw_reveals_back_operation() {
    let rig = rig();

    rig.chart.trigger_redraw();

    assert!(rig.tabs.operation_visible(Operation::Back));
    assert_eq!(rig.editor.phase(), EditorPhase::Rendered);
}

#[test]
fn test_return_to_viewer_navigates_then_reloads() {
    let rig = rig();

    rig.editor.return_to_viewer();

    assert_eq!(rig.host.navigations(), vec![AppView::Viewer]);
    assert_eq!(rig.host.load_count(), 1);
}
