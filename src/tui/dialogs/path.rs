//! File path prompt for saving and loading

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::path::{Path, PathBuf};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::tui::components::{render_text_field, TextField};
use crate::tui::styles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    Save,
    Load,
}

pub struct PathDialog {
    purpose: PathPurpose,
    path: Input,
}

impl PathDialog {
    pub fn new(purpose: PathPurpose, initial: &Path) -> Self {
        Self {
            purpose,
            path: Input::new(initial.display().to_string()),
        }
    }

    pub fn purpose(&self) -> PathPurpose {
        self.purpose
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<PathBuf> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let value = self.path.value().trim();
                if value.is_empty() {
                    DialogResult::Continue
                } else {
                    DialogResult::Submit(PathBuf::from(value))
                }
            }
            _ => {
                self.path.handle_event(&Event::Key(key));
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 70, 7);

        frame.render_widget(Clear, dialog_area);

        let (title, action) = match self.purpose {
            PathPurpose::Save => (" Save to File ", " save  "),
            PathPurpose::Load => (" Load from File ", " load  "),
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
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        let field = TextField {
            label: "Path:",
            label_width: 5,
            input: &self.path,
            focused: true,
            placeholder: None,
        };
        render_text_field(frame, chunks[0], &field, theme);

        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(action),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(theme.dimmed)),
            chunks[1],
        );
    }
}
