//! Minimal wiring of the editor against an in-process host.
//!
//! Run with: cargo run -p chart-editor --example quickstart

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use chart_editor::{
    AppView, Editor, Host, Operation, SaveOutcome, TabContainer, TabId, TabSpec,
};
use chart_model::{Chart, ColumnBinding};
use chart_types::{ChartTypeRegistry, ColumnClass};

/// Tab container that narrates what a real widget would do.
struct ConsoleTabs {
    tabs: Mutex<Vec<TabSpec>>,
}

impl ConsoleTabs {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            tabs: Mutex::new(Vec::new()),
        })
    }
}

impl TabContainer for ConsoleTabs {
    fn add(&self, tab: TabSpec) {
        println!("[tabs] add {:?}", tab);
        self.tabs.lock().push(tab);
    }

    fn remove(&self, id: &TabId) {
        println!("[tabs] remove {}", id);
        self.tabs.lock().retain(|tab| &tab.id != id);
    }

    fn remove_removable(&self) {
        println!("[tabs] clear group tabs");
        self.tabs.lock().retain(|tab| !tab.is_removable());
    }

    fn show(&self, id: &TabId) {
        println!("[tabs] show {}", id);
    }

    fn set_title(&self, id: &TabId, title: &str) {
        println!("[tabs] retitle {} -> {:?}", id, title);
        let mut tabs = self.tabs.lock();
        if let Some(tab) = tabs.iter_mut().find(|tab| &tab.id == id) {
            tab.title = Some(title.to_string());
        }
    }

    fn show_operation(&self, operation: Operation) {
        println!("[tabs] show operation {:?}", operation);
    }

    fn hide_operation(&self, operation: Operation) {
        println!("[tabs] hide operation {:?}", operation);
    }
}

/// Host that persists the chart snapshot to stdout and runs deferred
/// jobs from a FIFO queue when asked.
struct DemoHost {
    chart: Arc<Chart>,
    queue: Mutex<VecDeque<Box<dyn FnOnce() + Send>>>,
}

impl DemoHost {
    fn new(chart: Arc<Chart>) -> Arc<Self> {
        Arc::new(Self {
            chart,
            queue: Mutex::new(VecDeque::new()),
        })
    }

    fn run_deferred(&self) {
        loop {
            let job = self.queue.lock().pop_front();
            match job {
                Some(job) => job(),
                None => break,
            }
        }
    }
}

impl Host for DemoHost {
    fn navigate(&self, view: AppView) {
        println!("[host] navigate to {:?}", view);
    }

    fn save_chart(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.chart.data())?;
        println!("[host] persisted chart:\n{}", json);
        Ok(())
    }

    fn load_chart(&self) -> Result<()> {
        println!("[host] restored chart from storage");
        Ok(())
    }

    fn defer(&self, job: Box<dyn FnOnce() + Send>) {
        self.queue.lock().push_back(job);
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    // Columns of the dataset being visualized, as a column picker would
    // offer them.
    let dataset_columns = [
        ("chrom", ColumnClass::Label),
        ("position", ColumnClass::Numeric),
        ("depth", ColumnClass::Numeric),
    ];

    let registry = Arc::new(ChartTypeRegistry::builtin());
    let chart = Arc::new(Chart::new("dataset-42"));
    let tabs = ConsoleTabs::new();
    let host = DemoHost::new(Arc::clone(&chart));
    let editor = Editor::new(
        Arc::clone(&chart),
        Arc::clone(&registry),
        tabs,
        host.clone(),
        "dataset-42",
    );

    editor.title_edited("Coverage by chromosome");

    // Saving with no groups does not hand off; it opens an empty group.
    let created = match editor.save() {
        SaveOutcome::NoGroups { created } => created,
        outcome => {
            println!("unexpected outcome: {:?}", outcome);
            return;
        }
    };
    if let Some(message) = editor.message() {
        println!("[editor] {:?}: {}", message.status, message.text);
    }

    // Fill the offered group the way a column picker would: first
    // dataset column whose class satisfies each required role.
    chart.set_group_key(created, "Sample A");
    if let Some(definition) = chart.definition() {
        for (role, requirement) in definition.required_roles() {
            let binding = dataset_columns
                .iter()
                .find(|(_, class)| requirement.class.accepts(*class))
                .map(|(name, _)| ColumnBinding::from(*name))
                .unwrap_or(ColumnBinding::Unavailable);
            chart.bind_group_column(created, role, binding);
        }
    }

    match editor.save() {
        SaveOutcome::Accepted => println!("[editor] save accepted, persistence queued"),
        outcome => {
            println!("unexpected outcome: {:?}", outcome);
            return;
        }
    }

    // The host runs deferred work once the interaction finishes; the
    // redraw signal then flips the editor to its rendered phase.
    host.run_deferred();
    println!(
        "[editor] phase after persistence: {:?}, heading {:?}",
        editor.phase(),
        editor.heading()
    );

    editor.return_to_viewer();
}
