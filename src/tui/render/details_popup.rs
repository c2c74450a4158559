use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;

use super::popup_area;

/// Render the study-details popup for the entry it was opened on.
pub fn render_details_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref entry_id) = app.details_id else {
        return;
    };
    let detail = app.session.study_details(entry_id);
    let theme = &app.theme;
    let bg = theme.background;

    let popup = popup_area(area, 70, 70);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(Span::styled(
            detail.theme,
            Style::default()
                .fg(theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Discussion questions",
            Style::default().fg(theme.text_bright).bg(bg),
        )),
    ];
    for (i, question) in detail.questions.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  {}. {}", i + 1, question),
            Style::default().fg(theme.text).bg(bg),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Memory verse — {}", detail.memory_verse.reference),
        Style::default().fg(theme.text_bright).bg(bg),
    )));
    lines.push(Line::from(Span::styled(
        format!("  “{}”", detail.memory_verse.text),
        Style::default().fg(theme.text).bg(bg),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Application: {}", detail.application),
        Style::default().fg(theme.text).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
        .title(Span::styled(
            format!(" {} ", entry_id),
            Style::default().fg(theme.accent).bg(bg),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
