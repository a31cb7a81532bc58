//! Task operations for HomeView (add, edit, remove, save, load)

use std::path::PathBuf;

use crate::tui::app::Action;
use crate::tui::dialogs::{
    ConfirmAction, InfoDialog, PathDialog, PathPurpose, TaskFormData, TaskFormMode,
};

use super::HomeView;

impl HomeView {
    pub(super) fn submit_task_form(&mut self, data: TaskFormData) {
        match data.mode {
            TaskFormMode::Add => {
                match self
                    .manager
                    .create(&data.description, &data.due_date, &data.priority)
                {
                    Ok(task_id) => {
                        self.task_dialog = None;
                        self.dirty = true;
                        if let Some(pos) = self.visible_ids().iter().position(|id| *id == task_id)
                        {
                            self.cursor = pos;
                        }
                        self.flash(format!("Added task {}", task_id));
                    }
                    Err(e) => {
                        if let Some(dialog) = &mut self.task_dialog {
                            dialog.set_error(e.to_string());
                        }
                    }
                }
            }
            TaskFormMode::Edit(task_id) => {
                self.task_dialog = None;
                if self.manager.get(task_id).is_none() {
                    self.info_dialog = Some(InfoDialog::error(&format!(
                        "Task {} no longer exists.",
                        task_id
                    )));
                    return;
                }
                self.manager
                    .edit(task_id, &data.description, &data.due_date, &data.priority);
                self.dirty = true;
                // The new description may no longer match the filter
                self.clamp_cursor();
                self.flash(format!("Updated task {}", task_id));
            }
        }
    }

    pub(super) fn apply_confirm(&mut self, action: ConfirmAction) -> Option<Action> {
        match action {
            ConfirmAction::RemoveTask(task_id) => {
                self.manager.remove(task_id);
                self.dirty = true;
                self.clamp_cursor();
                self.flash(format!("Removed task {}", task_id));
                None
            }
            ConfirmAction::DiscardChanges => Some(Action::Quit),
            ConfirmAction::DiscardAndLoad => {
                self.path_dialog = Some(PathDialog::new(PathPurpose::Load, &self.file_path));
                None
            }
        }
    }

    pub(super) fn save_to(&mut self, path: PathBuf) {
        match self.manager.save(&path) {
            Ok(()) => {
                self.info_dialog = Some(InfoDialog::new(
                    "Saved",
                    &format!("Tasks saved to {}", path.display()),
                ));
                self.file_path = path;
                self.dirty = false;
            }
            Err(e) => {
                tracing::error!("Failed to save tasks: {}", e);
                self.info_dialog = Some(InfoDialog::error(&e.to_string()));
            }
        }
    }

    /// Replace the list with the contents of `path`. On failure the current
    /// list is kept as it was.
    pub(super) fn load_from(&mut self, path: PathBuf) {
        match self.manager.load(&path) {
            Ok(()) => {
                self.info_dialog = Some(InfoDialog::new(
                    "Loaded",
                    &format!("Tasks loaded from {}", path.display()),
                ));
                self.file_path = path;
                self.dirty = false;
                self.search_query.clear();
                self.cursor = 0;
            }
            Err(e) => {
                tracing::error!("Failed to load tasks: {}", e);
                self.info_dialog = Some(InfoDialog::error(&e.to_string()));
            }
        }
    }
}
