use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::PlanKind;
use crate::tui::app::App;

const TABS: [(PlanKind, &str, &str); 3] = [
    (PlanKind::Calendar, "1", "Calendar"),
    (PlanKind::Chronological, "2", "Chronological"),
    (PlanKind::Nt90, "3", "NT in 90 Days"),
];

/// Render the plan tab bar with the overall progress on the right.
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let active_plan = app.session.view().plan();

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (plan, key, label) in TABS {
        let style = if plan == active_plan {
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!("{}:{}", key, label), style));
        spans.push(Span::styled("  ", Style::default().bg(bg)));
    }

    // Right-aligned progress summary
    let progress = app.session.progress();
    let summary = format!(
        "{}/{} ({}%) ",
        progress.completed, progress.total, progress.percent
    );
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let width = area.width as usize;
    if content_width + summary.chars().count() < width {
        let padding = width - content_width - summary.chars().count();
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            summary,
            Style::default().fg(app.theme.completed).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
