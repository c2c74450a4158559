pub mod details_popup;
pub mod help_overlay;
pub mod month_bar;
pub mod notes_popup;
pub mod plan_view;
pub mod status_row;
pub mod tab_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, Mode};
use crate::ops::session::ViewSelection;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let is_calendar = matches!(app.session.view(), ViewSelection::Calendar(_));

    // Layout: tab bar (2) | [month bar (2)] | content | status row (1)
    let constraints: Vec<Constraint> = if is_calendar {
        vec![
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    let (content, status) = if is_calendar {
        month_bar::render_month_bar(frame, app, chunks[1]);
        (chunks[2], chunks[3])
    } else {
        (chunks[1], chunks[2])
    };

    plan_view::render_plan_view(frame, app, content);
    status_row::render_status_row(frame, app, status);

    // Popups render on top of everything
    if app.mode == Mode::Notes {
        notes_popup::render_notes_popup(frame, app, frame.area());
    }
    if app.details_id.is_some() {
        details_popup::render_details_popup(frame, app, frame.area());
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Centered popup rectangle sized as a percentage of the given area.
pub(super) fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
