use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /pattern▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.accent).bg(bg)),
            ];
            pad_with_hint(&mut spans, "Enter search  Esc cancel", width, app);
            Line::from(spans)
        }
        Mode::Notes => {
            let mut spans = vec![Span::styled(
                "editing note",
                Style::default().fg(app.theme.dim).bg(bg),
            )];
            pad_with_hint(&mut spans, "Enter save  Esc cancel", width, app);
            Line::from(spans)
        }
        Mode::Navigate => {
            let mut spans = if let Some(ref pattern) = app.last_search {
                vec![Span::styled(
                    format!("/{}", pattern),
                    Style::default().fg(app.theme.dim).bg(bg),
                )]
            } else {
                vec![Span::styled(" ", Style::default().bg(bg))]
            };
            if app.config.ui.show_key_hints {
                pad_with_hint(
                    &mut spans,
                    "space toggle  n note  enter details  t today  / search  ? help  q quit",
                    width,
                    app,
                );
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn pad_with_hint(spans: &mut Vec<Span<'_>>, hint: &str, width: usize, app: &App) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
