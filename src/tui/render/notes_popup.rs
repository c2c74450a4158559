use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::catalog;
use crate::tui::app::App;

use super::popup_area;

/// Render the notes editor popup over the entry it targets.
pub fn render_notes_popup(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let title = app
        .session
        .notes_target()
        .and_then(catalog::entry_by_id)
        .map(|entry| entry.title())
        .unwrap_or_else(|| "Note".to_string());

    let popup = popup_area(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                app.notes_buffer.clone(),
                Style::default().fg(theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(theme.accent).bg(bg)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Enter save   Esc cancel   (empty clears the note)",
            Style::default().fg(theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
        .title(Span::styled(
            format!(" ✎ {} ", title),
            Style::default().fg(theme.note_marker).bg(bg),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
