use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::catalog::MONTHS;
use crate::ops::session::ViewSelection;
use crate::tui::app::App;

/// Render the 13-month selector under the tab bar. Amharic names are
/// double-width in most terminals, so padding goes by display width.
pub fn render_month_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let selected = match app.session.view() {
        ViewSelection::Calendar(index) => index,
        _ => return,
    };

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut used = 1usize;
    let width = area.width as usize;

    for (index, month) in MONTHS.iter().enumerate() {
        let label = format!("{} ", month.name);
        let label_width = UnicodeWidthStr::width(label.as_str());
        if used + label_width >= width {
            break;
        }
        used += label_width;
        let style = if index == selected {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(label, style));
    }

    // Selected month's English name and theme on the separator row
    let month = &MONTHS[selected];
    let caption = format!(" {} — {} ({})", month.english, month.theme, month.weeks);
    let caption_line = Line::from(Span::styled(
        caption,
        Style::default().fg(app.theme.text).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), caption_line]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
