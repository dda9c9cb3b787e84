//! Recording fakes for the editor's collaborator contracts.

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::{bail, Result};
use parking_lot::Mutex;

use chart_editor::{AppView, Editor, Host, Operation, TabContainer, TabId, TabSpec};
use chart_model::Chart;
use chart_types::ChartTypeRegistry;

pub const DATASET: &str = "dataset-7";

/// Tab container that records every call for later assertions.
pub struct FakeTabs {
    state: Mutex<TabsState>,
}

#[derive(Default)]
struct TabsState {
    tabs: Vec<TabSpec>,
    active: Option<TabId>,
    visible_operations: Vec<Operation>,
}

impl FakeTabs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(TabsState::default()),
        })
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.state.lock().tabs.iter().any(|tab| &tab.id == id)
    }

    pub fn title_of(&self, id: &TabId) -> Option<String> {
        self.state
            .lock()
            .tabs
            .iter()
            .find(|tab| &tab.id == id)
            .and_then(|tab| tab.title.clone())
    }

    /// Titles of the removable tabs, in container order.
    pub fn removable_titles(&self) -> Vec<String> {
        self.state
            .lock()
            .tabs
            .iter()
            .filter(|tab| tab.is_removable())
            .map(|tab| tab.title.clone().unwrap_or_default())
            .collect()
    }

    pub fn removable_count(&self) -> usize {
        self.state.lock().tabs.iter().filter(|tab| tab.is_removable()).count()
    }

    pub fn active(&self) -> Option<TabId> {
        self.state.lock().active.clone()
    }

    pub fn operation_visible(&self, operation: Operation) -> bool {
        self.state.lock().visible_operations.contains(&operation)
    }

    /// Simulate the user closing a tab. The close handler runs with the
    /// container lock released, as a real widget must: it re-enters the
    /// container synchronously to drop the tab.
    pub fn close_tab(&self, id: &TabId) {
        let handler = {
            let mut state = self.state.lock();
            state
                .tabs
                .iter_mut()
                .find(|tab| &tab.id == id)
                .and_then(|tab| tab.on_close.take())
        };
        if let Some(handler) = handler {
            handler();
        }
    }
}

impl TabContainer for FakeTabs {
    fn add(&self, tab: TabSpec) {
        self.state.lock().tabs.push(tab);
    }

    fn remove(&self, id: &TabId) {
        let mut state = self.state.lock();
        state.tabs.retain(|tab| &tab.id != id);
        if state.active.as_ref() == Some(id) {
            state.active = None;
        }
    }

    fn remove_removable(&self) {
        self.state.lock().tabs.retain(|tab| !tab.is_removable());
    }

    fn show(&self, id: &TabId) {
        self.state.lock().active = Some(id.clone());
    }

    fn set_title(&self, id: &TabId, title: &str) {
        let mut state = self.state.lock();
        if let Some(tab) = state.tabs.iter_mut().find(|tab| &tab.id == id) {
            tab.title = Some(title.to_string());
        }
    }

    fn show_operation(&self, operation: Operation) {
        let mut state = self.state.lock();
        if !state.visible_operations.contains(&operation) {
            state.visible_operations.push(operation);
        }
    }

    fn hide_operation(&self, operation: Operation) {
        self.state.lock().visible_operations.retain(|op| op != &operation);
    }
}

/// Host that records navigation and persistence and queues deferred jobs.
pub struct FakeHost {
    state: Mutex<HostState>,
}

#[derive(Default)]
struct HostState {
    navigations: Vec<AppView>,
    saves: usize,
    loads: usize,
    fail_next_save: bool,
    queue: VecDeque<Box<dyn FnOnce() + Send>>,
}

impl FakeHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(HostState::default()),
        })
    }

    pub fn navigations(&self) -> Vec<AppView> {
        self.state.lock().navigations.clone()
    }

    pub fn save_count(&self) -> usize {
        self.state.lock().saves
    }

    pub fn load_count(&self) -> usize {
        self.state.lock().loads
    }

    /// Make the next `save_chart` call report a storage failure.
    pub fn fail_next_save(&self) {
        self.state.lock().fail_next_save = true;
    }

    pub fn queued(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Run deferred jobs FIFO until the queue is empty. Jobs run with
    /// the host lock released so they may defer further work.
    pub fn drain(&self) {
        loop {
            let job = self.state.lock().queue.pop_front();
            match job {
                Some(job) => job(),
                None => return,
            }
        }
    }
}

impl Host for FakeHost {
    fn navigate(&self, view: AppView) {
        self.state.lock().navigations.push(view);
    }

    fn save_chart(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.saves += 1;
        if state.fail_next_save {
            state.fail_next_save = false;
            bail!("storage offline");
        }
        Ok(())
    }

    fn load_chart(&self) -> Result<()> {
        self.state.lock().loads += 1;
        Ok(())
    }

    fn defer(&self, job: Box<dyn FnOnce() + Send>) {
        self.state.lock().queue.push_back(job);
    }
}

/// A fully wired editing session over the recording fakes.
pub struct Rig {
    pub chart: Arc<Chart>,
    pub registry: Arc<ChartTypeRegistry>,
    pub tabs: Arc<FakeTabs>,
    pub host: Arc<FakeHost>,
    pub editor: Arc<Editor>,
}

pub fn rig() -> Rig {
    let chart = Arc::new(Chart::new(DATASET));
    let registry = Arc::new(ChartTypeRegistry::builtin());
    let tabs = FakeTabs::new();
    let host = FakeHost::new();
    let editor = Editor::new(
        Arc::clone(&chart),
        Arc::clone(&registry),
        tabs.clone(),
        host.clone(),
        DATASET,
    );
    Rig {
        chart,
        registry,
        tabs,
        host,
        editor,
    }
}
