//! Labelled single-line text field

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

pub struct TextField<'a> {
    pub label: &'a str,
    /// Column width the label is padded to, so stacked fields line up
    pub label_width: usize,
    pub input: &'a Input,
    pub focused: bool,
    pub placeholder: Option<&'a str>,
}

/// Draw `field` on one line. A focused field shows an inverse-video cursor at
/// the input's cursor position; an empty unfocused field shows its placeholder.
pub fn render_text_field(frame: &mut Frame, area: Rect, field: &TextField, theme: &Theme) {
    let label_style = if field.focused {
        Style::default().fg(theme.accent).bold()
    } else {
        Style::default().fg(theme.dimmed)
    };
    let value_style = Style::default().fg(theme.text);

    let value = field.input.value();
    let mut spans = vec![Span::styled(
        format!("{:<width$} ", field.label, width = field.label_width),
        label_style,
    )];

    if !field.focused {
        match field.placeholder {
            Some(placeholder) if value.is_empty() => {
                spans.push(Span::styled(placeholder, Style::default().fg(theme.dimmed)));
            }
            _ => spans.push(Span::styled(value, value_style)),
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    let cursor_pos = field.input.cursor();
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let before: String = value.chars().take(cursor_pos).collect();
    let at_cursor: String = value
        .chars()
        .nth(cursor_pos)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = value.chars().skip(cursor_pos + 1).collect();

    if !before.is_empty() {
        spans.push(Span::styled(before, value_style));
    }
    spans.push(Span::styled(at_cursor, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
