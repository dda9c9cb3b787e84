//! Contract for the application hosting the editor

use anyhow::Result;

/// Top-level application surfaces the editor can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Editor,
    Viewer,
}

/// Services the host application provides to the editor
///
/// Persistence is opaque: the host decides where chart state lives and
/// what format it takes; both storage calls operate on state the host
/// already shares with the editor.
pub trait Host: Send + Sync {
    /// Switch the visible application surface
    fn navigate(&self, view: AppView);

    /// Persist the current chart
    fn save_chart(&self) -> Result<()>;

    /// Restore the chart from persistent storage
    fn load_chart(&self) -> Result<()>;

    /// Run a job after the current interaction completes, FIFO with
    /// respect to other deferred jobs
    fn defer(&self, job: Box<dyn FnOnce() + Send>);
}
