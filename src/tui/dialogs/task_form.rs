//! Add / edit task dialog

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::Task;
use crate::tui::components::{render_text_field, TextField};
use crate::tui::styles::Theme;

const FIELD_COUNT: usize = 3;
const LABEL_WIDTH: usize = 12;
const PRIORITY_HINT: &str = "High/Medium/Low";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFormMode {
    Add,
    /// Carries the id only; the task is looked up again on submit
    Edit(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormData {
    pub mode: TaskFormMode,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

pub struct TaskDialog {
    mode: TaskFormMode,
    description: Input,
    due_date: Input,
    priority: Input,
    focused_field: usize,
    error_message: Option<String>,
}

impl TaskDialog {
    pub fn add() -> Self {
        Self {
            mode: TaskFormMode::Add,
            description: Input::default(),
            due_date: Input::default(),
            priority: Input::default(),
            focused_field: 0,
            error_message: None,
        }
    }

    /// Dialog pre-filled with `task`'s current values
    pub fn edit(task: &Task) -> Self {
        Self {
            mode: TaskFormMode::Edit(task.task_id()),
            description: Input::new(task.description.clone()),
            due_date: Input::new(task.due_date.clone()),
            priority: Input::new(task.priority.clone()),
            focused_field: 0,
            error_message: None,
        }
    }

    pub fn mode(&self) -> TaskFormMode {
        self.mode
    }

    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskFormData> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                self.error_message = None;
                DialogResult::Submit(TaskFormData {
                    mode: self.mode,
                    description: self.description.value().to_string(),
                    due_date: self.due_date.value().to_string(),
                    priority: self.priority.value().to_string(),
                })
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = (self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            _ => {
                self.current_input_mut().handle_event(&Event::Key(key));
                self.error_message = None;
                DialogResult::Continue
            }
        }
    }

    fn current_input_mut(&mut self) -> &mut Input {
        match self.focused_field {
            0 => &mut self.description,
            1 => &mut self.due_date,
            _ => &mut self.priority,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 64, 11);

        frame.render_widget(Clear, dialog_area);

        let title = match self.mode {
            TaskFormMode::Add => " Add Task ".to_string(),
            TaskFormMode::Edit(id) => format!(" Edit Task {} ", id),
        };
        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(title)
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        let fields = [
            ("Description:", &self.description, None),
            ("Due Date:", &self.due_date, None),
            ("Priority:", &self.priority, Some(PRIORITY_HINT)),
        ];
        for (idx, (label, input, placeholder)) in fields.into_iter().enumerate() {
            let field = TextField {
                label,
                label_width: LABEL_WIDTH,
                input,
                focused: idx == self.focused_field,
                placeholder,
            };
            render_text_field(frame, chunks[idx], &field, theme);
        }

        if let Some(error) = &self.error_message {
            frame.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.error)),
                chunks[3],
            );
        }

        let submit_label = match self.mode {
            TaskFormMode::Add => " save task  ",
            TaskFormMode::Edit(_) => " save changes  ",
        };
        let hint = Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.hint)),
            Span::raw(" next field  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(submit_label),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(theme.dimmed)),
            chunks[4],
        );
    }
}
