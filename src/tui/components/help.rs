//! Help overlay component

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 24;
#[cfg(test)]
const BORDER_HEIGHT: u16 = 2;
#[cfg(test)]
const BORDER_WIDTH: u16 = 2;
#[cfg(test)]
const KEY_COLUMN_WIDTH: usize = 12; // 2 spaces indent + 10 chars for key

fn shortcuts() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            "Navigation",
            vec![
                ("j/↓", "Move down"),
                ("k/↑", "Move up"),
                ("g", "Go to top"),
                ("G", "Go to bottom"),
            ],
        ),
        (
            "Tasks",
            vec![
                ("a/n", "Add task"),
                ("e/Enter", "Edit task"),
                ("d/Del", "Remove task"),
                ("/", "Filter by description"),
            ],
        ),
        (
            "File",
            vec![("s", "Save to file"), ("o", "Load from file")],
        ),
        (
            "Other",
            vec![
                ("t", "Toggle dark mode"),
                ("?", "Toggle help"),
                ("q", "Quit"),
            ],
        ),
    ]
}

#[cfg(test)]
fn content_line_count() -> usize {
    shortcuts().iter().map(|(_, keys)| keys.len() + 2).sum()
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let x = area.x + (area.width.saturating_sub(DIALOG_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(DIALOG_HEIGHT)) / 2;

        let dialog_area = Rect {
            x,
            y,
            width: DIALOG_WIDTH.min(area.width),
            height: DIALOG_HEIGHT.min(area.height),
        };

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut lines: Vec<Line> = Vec::new();
        for (section, keys) in shortcuts() {
            lines.push(Line::from(Span::styled(
                section,
                Style::default().fg(theme.accent).bold(),
            )));
            for (key, desc) in keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:10}", key), Style::default().fg(theme.hint)),
                    Span::styled(desc, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
