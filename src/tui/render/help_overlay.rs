use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::popup_area;

const BINDINGS: [(&str, &str); 13] = [
    ("j / k", "move cursor"),
    ("g / G", "top / bottom"),
    ("t", "jump to today (Ethiopian calendar)"),
    ("1 / 2 / 3", "calendar / chronological / NT 90 plan"),
    ("Tab", "next plan"),
    ("h / l", "previous / next month"),
    ("space / x", "toggle completion"),
    ("n", "edit note"),
    ("Enter / d", "study details"),
    ("/", "search readings"),
    ("Esc", "clear search"),
    ("?", "this help"),
    ("q", "quit"),
];

/// Render the key-binding help overlay.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let popup = popup_area(area, 50, 70);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<11}", keys),
                    Style::default().fg(theme.accent).bg(bg),
                ),
                Span::styled(action.to_string(), Style::default().fg(theme.text).bg(bg)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
        .title(Span::styled(
            " Keys ",
            Style::default().fg(theme.accent).bg(bg),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
