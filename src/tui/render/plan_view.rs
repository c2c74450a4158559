use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::render::EntryCard;
use crate::tui::app::App;

use super::push_highlighted_spans;

/// Render the current plan's card list plus a detail pane for the selection.
pub fn render_plan_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let cards = app.cards();
    app.clamp_cursor();

    let detail_height = 7.min(area.height / 2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(detail_height)])
        .split(area);

    render_card_list(frame, app, &cards, chunks[0]);

    let cursor = app.view_state().cursor;
    if let Some(card) = cards.get(cursor) {
        render_detail_pane(frame, app, card, chunks[1]);
    }
}

fn render_card_list(frame: &mut Frame, app: &mut App, cards: &[EntryCard], area: Rect) {
    let bg = app.theme.background;
    let visible = area.height as usize;
    let search_re = app.active_search_re();

    // Keep the cursor on screen
    let cursor = {
        let state = app.view_state();
        if state.cursor < state.scroll_offset {
            state.scroll_offset = state.cursor;
        } else if visible > 0 && state.cursor >= state.scroll_offset + visible {
            state.scroll_offset = state.cursor - visible + 1;
        }
        state.cursor
    };
    let scroll = app.view_state().scroll_offset;

    let theme = &app.theme;
    let mut lines = Vec::new();
    for (index, card) in cards.iter().enumerate().skip(scroll).take(visible) {
        let is_selected = index == cursor;
        let row_bg = if is_selected { theme.selection_bg } else { bg };

        let marker = if is_selected { "▸ " } else { "  " };
        let check = if card.completed { "[x]" } else { "[ ]" };
        let check_style = if card.completed {
            Style::default().fg(theme.completed).bg(row_bg)
        } else {
            Style::default().fg(theme.dim).bg(row_bg)
        };
        let heading_style = if is_selected {
            Style::default()
                .fg(theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else if card.completed {
            Style::default().fg(theme.dim).bg(row_bg)
        } else {
            Style::default().fg(theme.text).bg(row_bg)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(theme.accent).bg(row_bg)),
            Span::styled(check, check_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(format!("{:<8}", card.heading), heading_style),
            Span::styled(" ", Style::default().bg(row_bg)),
        ];

        let summary = card.body.first().map(|s| s.as_str()).unwrap_or("");
        push_highlighted_spans(
            &mut spans,
            summary,
            Style::default().fg(theme.text).bg(row_bg),
            Style::default()
                .fg(theme.search_match_fg)
                .bg(theme.search_match_bg),
            search_re.as_ref(),
        );

        if card.has_note {
            spans.push(Span::styled(
                " ✎",
                Style::default().fg(theme.note_marker).bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_detail_pane(frame: &mut Frame, app: &App, card: &EntryCard, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let mut lines = Vec::new();
    for body_line in &card.body {
        lines.push(Line::from(Span::styled(
            body_line.clone(),
            Style::default().fg(theme.text).bg(bg),
        )));
    }
    if let Some(note) = app.session.store().note(&card.id) {
        lines.push(Line::from(Span::styled(
            format!("✎ {}", note),
            Style::default().fg(theme.note_marker).bg(bg),
        )));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default().fg(theme.accent).bg(bg),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
