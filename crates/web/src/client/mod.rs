//! Markup for the workouts page: the table renderer, the per-row editor and
//! the page shell that wires them to the browser.

pub mod date;
pub mod editor;
pub mod page;
pub mod table;

pub use editor::{RowDraft, RowEditor, RowState, SaveEffect};
pub use table::{RowView, TableView};

/// Escape HTML special characters
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
