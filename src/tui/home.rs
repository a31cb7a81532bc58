//! Home view - task list, filtering and dialogs

mod operations;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{
    ConfirmAction, ConfirmDialog, DialogResult, InfoDialog, PathDialog, PathPurpose, TaskDialog,
};
use super::styles::Theme;
use crate::task::TaskManager;

const STATUS_TTL: Duration = Duration::from_secs(4);
const PAGE_SIZE: i32 = 10;

pub struct HomeView {
    manager: TaskManager,
    file_path: PathBuf,
    dirty: bool,

    // UI state
    cursor: usize,

    // Dialogs
    show_help: bool,
    task_dialog: Option<TaskDialog>,
    confirm_dialog: Option<ConfirmDialog>,
    path_dialog: Option<PathDialog>,
    info_dialog: Option<InfoDialog>,

    // Search
    search_active: bool,
    search_query: String,

    status_message: Option<(String, Instant)>,
}

impl HomeView {
    /// Open `file_path`. A file that cannot be read leaves the list empty and
    /// shows the error instead.
    pub fn new(file_path: PathBuf) -> Self {
        let (manager, info_dialog) = match TaskManager::open(&file_path) {
            Ok(manager) => (manager, None),
            Err(e) => {
                tracing::error!("Failed to open {}: {}", file_path.display(), e);
                (TaskManager::new(), Some(InfoDialog::error(&e.to_string())))
            }
        };

        Self {
            manager,
            file_path,
            dirty: false,
            cursor: 0,
            show_help: false,
            task_dialog: None,
            confirm_dialog: None,
            path_dialog: None,
            info_dialog,
            search_active: false,
            search_query: String::new(),
            status_message: None,
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help
            || self.task_dialog.is_some()
            || self.confirm_dialog.is_some()
            || self.path_dialog.is_some()
            || self.info_dialog.is_some()
    }

    /// Ids of the tasks currently shown, in list order
    fn visible_ids(&self) -> Vec<u64> {
        self.manager
            .filter(&self.search_query)
            .iter()
            .map(|t| t.task_id())
            .collect()
    }

    fn selected_task_id(&self) -> Option<u64> {
        self.visible_ids().get(self.cursor).copied()
    }

    pub(super) fn flash(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has been shown long enough. Returns
    /// true when the screen needs a redraw.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        match &self.status_message {
            Some((_, shown_at)) if now.duration_since(*shown_at) >= STATUS_TTL => {
                self.status_message = None;
                true
            }
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Handle dialog input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.info_dialog {
            if let DialogResult::Cancel | DialogResult::Submit(()) = dialog.handle_key(key) {
                self.info_dialog = None;
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                }
                DialogResult::Submit(action) => {
                    self.confirm_dialog = None;
                    return self.apply_confirm(action);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.path_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.path_dialog = None;
                }
                DialogResult::Submit(path) => {
                    let purpose = dialog.purpose();
                    self.path_dialog = None;
                    match purpose {
                        PathPurpose::Save => self.save_to(path),
                        PathPurpose::Load => self.load_from(path),
                    }
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.task_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.task_dialog = None;
                }
                DialogResult::Submit(data) => self.submit_task_form(data),
            }
            return None;
        }

        // Search mode
        if self.search_active {
            match key.code {
                KeyCode::Esc => {
                    self.search_active = false;
                    self.search_query.clear();
                    self.cursor = 0;
                }
                KeyCode::Enter => {
                    self.search_active = false;
                }
                KeyCode::Backspace => {
                    self.search_query.pop();
                    self.cursor = 0;
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    self.cursor = 0;
                }
                _ => {}
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => {
                if !self.dirty {
                    return Some(Action::Quit);
                }
                self.confirm_dialog = Some(ConfirmDialog::new(
                    "Unsaved Changes",
                    "Quit without saving your changes?",
                    ConfirmAction::DiscardChanges,
                ));
            }
            KeyCode::Char('t') => return Some(Action::ToggleTheme),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('/') => {
                self.search_active = true;
                self.search_query.clear();
                self.cursor = 0;
            }
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.task_dialog = Some(TaskDialog::add());
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                match self.selected_task_id().and_then(|id| self.manager.get(id)) {
                    Some(task) => self.task_dialog = Some(TaskDialog::edit(task)),
                    None => {
                        self.info_dialog =
                            Some(InfoDialog::error("Please select a task to edit."));
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                match self.selected_task_id().and_then(|id| self.manager.get(id)) {
                    Some(task) => {
                        let message = format!("Remove task '{}'?", task.description);
                        self.confirm_dialog = Some(ConfirmDialog::new(
                            "Remove Task",
                            &message,
                            ConfirmAction::RemoveTask(task.task_id()),
                        ));
                    }
                    None => {
                        self.info_dialog =
                            Some(InfoDialog::error("Please select a task to remove."));
                    }
                }
            }
            KeyCode::Char('s') => {
                self.path_dialog = Some(PathDialog::new(PathPurpose::Save, &self.file_path));
            }
            KeyCode::Char('o') => {
                if self.dirty {
                    self.confirm_dialog = Some(ConfirmDialog::new(
                        "Unsaved Changes",
                        "Discard your changes and load another file?",
                        ConfirmAction::DiscardAndLoad,
                    ));
                } else {
                    self.path_dialog = Some(PathDialog::new(PathPurpose::Load, &self.file_path));
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
            }
            KeyCode::PageUp => {
                self.move_cursor(-PAGE_SIZE);
            }
            KeyCode::PageDown => {
                self.move_cursor(PAGE_SIZE);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                let count = self.visible_ids().len();
                self.cursor = count.saturating_sub(1);
            }
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        let items = self.visible_ids().len();
        if items == 0 {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.cursor + delta as usize).min(items - 1)
        };
    }

    /// Keep the cursor inside the visible list after it shrinks
    pub(super) fn clamp_cursor(&mut self) {
        let items = self.visible_ids().len();
        self.cursor = self.cursor.min(items.saturating_sub(1));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        // Layout: list + optional search bar + status bar at bottom
        let show_search = self.search_active || !self.search_query.is_empty();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(if show_search { 1 } else { 0 }),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_list(frame, chunks[0], theme);
        if show_search {
            self.render_search_bar(frame, chunks[1], theme);
        }
        self.render_status_bar(frame, chunks[2], theme);

        // Render dialogs on top
        if let Some(dialog) = &self.task_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.path_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.info_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let file_name = self
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_path.display().to_string());
        let title = format!(
            " Task Manager [{}{}] ",
            file_name,
            if self.dirty { " *" } else { "" }
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title)
            .title_style(Style::default().fg(theme.title).bold());

        let tasks = self.manager.filter(&self.search_query);
        if tasks.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let message = if self.manager.is_empty() {
                "No tasks yet. Press 'a' to add one."
            } else {
                "No tasks match the filter."
            };
            let hint = Paragraph::new(message)
                .style(Style::default().fg(theme.dimmed))
                .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        }

        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| {
                ListItem::new(Line::from(Span::styled(
                    task.summary_line(),
                    Style::default().fg(theme.text),
                )))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.selection).bold())
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_search_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![
            Span::styled("/", Style::default().fg(theme.accent).bold()),
            Span::styled(self.search_query.as_str(), Style::default().fg(theme.search)),
        ];
        if self.search_active {
            spans.push(Span::styled("_", Style::default().fg(theme.search)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let line = if let Some((message, _)) = &self.status_message {
            Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(theme.success),
            ))
        } else {
            let hints = [
                ("a", "Add"),
                ("e", "Edit"),
                ("d", "Remove"),
                ("s", "Save"),
                ("o", "Load"),
                ("/", "Filter"),
                ("?", "Help"),
                ("q", "Quit"),
            ];
            let mut spans = Vec::new();
            for (idx, (key, desc)) in hints.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::styled("│", sep_style));
                }
                spans.push(Span::styled(format!(" {}", key), key_style));
                spans.push(Span::styled(format!(" {} ", desc), desc_style));
            }
            Line::from(spans)
        };

        let status = Paragraph::new(line).style(Style::default().bg(theme.status_bar));
        frame.render_widget(status, area);
    }
}
