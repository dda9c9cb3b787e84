//! Headless state for the widgets the editor composes
//!
//! The editor owns widget state; the embedding UI renders it and feeds
//! user input back through the editor's action methods.

/// Placeholder shown in an empty title field
pub const TITLE_PLACEHOLDER: &str = "Chart title";

/// State of the chart-title text input
///
/// `revision` counts applied writes. The editor skips the write when
/// the model already matches the field, so a refresh that would disturb
/// in-progress typing shows up as an unchanged revision.
#[derive(Debug, Clone, Default)]
pub struct TitleInput {
    value: String,
    revision: u64,
}

impl TitleInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the field unconditionally
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.revision += 1;
    }

    /// Number of writes applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn placeholder(&self) -> &'static str {
        TITLE_PLACEHOLDER
    }
}

/// State of the chart-type picker
#[derive(Debug, Clone, Default)]
pub struct TypePickerState {
    selected: String,
}

impl TypePickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart type id currently selected
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, type_id: impl Into<String>) {
        self.selected = type_id.into();
    }
}

/// Severity of a blocking editor message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Info,
    Danger,
}

/// One message shown above the editor tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub status: MessageStatus,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            status: MessageStatus::Info,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            status: MessageStatus::Danger,
            text: text.into(),
        }
    }
}

/// Holds the most recent blocking message, if any
#[derive(Debug, Clone, Default)]
pub struct MessagePanel {
    current: Option<Message>,
}

impl MessagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing
    pub fn show(&mut self, message: Message) {
        self.current = Some(message);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }
}
