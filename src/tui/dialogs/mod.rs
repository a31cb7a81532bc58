//! TUI dialog components

mod confirm;
mod info;
mod path;
mod task_form;

pub use confirm::{ConfirmAction, ConfirmDialog};
pub use info::InfoDialog;
pub use path::{PathDialog, PathPurpose};
pub use task_form::{TaskDialog, TaskFormData, TaskFormMode};

use ratatui::layout::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// Fixed-size rect centered in `area`, clamped to its bounds
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
