//! Contract for the tabbed container that hosts the editor panes

use std::fmt;

use chart_model::GroupId;

/// Key identifying one tab in the container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    /// The fixed entry tab (title field, type picker, actions)
    pub fn start() -> Self {
        Self("main".into())
    }

    /// The fixed per-type settings tab
    pub fn settings() -> Self {
        Self("settings".into())
    }

    /// The tab editing one data group
    pub fn group(id: GroupId) -> Self {
        Self(id.simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Callback a container runs when the user closes a tab
///
/// Containers must invoke this with their internal state unlocked; the
/// handler mutates the chart, which synchronously calls back into the
/// container to drop the tab.
pub type TabCloseHandler = Box<dyn Fn() + Send + Sync>;

/// Everything the container needs to materialize a tab
///
/// Tabs registered with a close handler form the removable set; the
/// fixed editor tabs carry none. Content is not part of the contract:
/// the embedding UI resolves what to render from the tab id.
pub struct TabSpec {
    pub id: TabId,
    pub title: Option<String>,
    pub on_close: Option<TabCloseHandler>,
}

impl TabSpec {
    /// A permanent tab with a fixed title
    pub fn fixed(id: TabId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            on_close: None,
        }
    }

    /// A closable tab; its title arrives later via `set_title`
    pub fn removable(id: TabId, on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            id,
            title: None,
            on_close: Some(Box::new(on_close)),
        }
    }

    pub fn is_removable(&self) -> bool {
        self.on_close.is_some()
    }
}

impl fmt::Debug for TabSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabSpec")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("removable", &self.is_removable())
            .finish()
    }
}

/// Toolbar operations the editor toggles on the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Validate and persist the chart
    Save,
    /// Return to the viewer; revealed once the chart has rendered
    Back,
}

/// The tabbed-container widget the editor drives
///
/// Implementations must tolerate ids they do not know: removing,
/// showing or retitling an absent tab is a no-op, not an error.
pub trait TabContainer: Send + Sync {
    /// Register a tab
    fn add(&self, tab: TabSpec);

    /// Drop one tab
    fn remove(&self, id: &TabId);

    /// Drop every tab that carries a close handler
    fn remove_removable(&self);

    /// Bring a tab to the front
    fn show(&self, id: &TabId);

    /// Replace a tab's title
    fn set_title(&self, id: &TabId, title: &str);

    /// Reveal a toolbar operation
    fn show_operation(&self, operation: Operation);

    /// Hide a toolbar operation
    fn hide_operation(&self, operation: Operation);
}
