//! Interactive editor for chart definitions
//!
//! Orchestrates an editing session over the observable chart model:
//! fixed tabs for entry and per-type settings, one removable tab per
//! data group, heading/title/picker synchronization driven by chart
//! events, and the validation + save protocol that gates the handoff
//! to the viewer.
//!
//! The surrounding application is abstract. The editor drives a
//! [`TabContainer`] and a [`Host`] and never renders anything itself;
//! embedding UIs render the editor-owned widget state and feed user
//! input back through [`Editor`] action methods.

mod editor;
mod host;
mod surface;
mod widgets;

pub use editor::{
    Editor, EditorPhase, SaveOutcome, GROUP_LABEL_PLACEHOLDER, NEW_CHART_TITLE, NO_GROUPS_MESSAGE,
    UNBOUND_COLUMN_MESSAGE,
};
pub use host::{AppView, Host};
pub use surface::{Operation, TabCloseHandler, TabContainer, TabId, TabSpec};
pub use widgets::{
    Message, MessagePanel, MessageStatus, TitleInput, TypePickerState, TITLE_PLACEHOLDER,
};
