use crossterm::event::{KeyCode, KeyEvent};

use crate::model::PlanKind;
use crate::ops::session::ViewSelection;
use crate::tui::app::{App, Mode};

pub fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay swallows every key
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Details popup: close on the same keys that open it
    if app.details_id.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('q')
        ) {
            app.details_id = None;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => jump_top(app),
        KeyCode::Char('G') | KeyCode::End => jump_bottom(app),
        KeyCode::Char('t') => app.jump_to_today(),

        KeyCode::Char('1') => select_plan(app, PlanKind::Calendar),
        KeyCode::Char('2') => select_plan(app, PlanKind::Chronological),
        KeyCode::Char('3') => select_plan(app, PlanKind::Nt90),
        KeyCode::Tab => cycle_plan(app),

        KeyCode::Char('h') | KeyCode::Left => shift_month(app, -1),
        KeyCode::Char('l') | KeyCode::Right => shift_month(app, 1),

        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                app.session.toggle_reading(&id);
            }
        }
        KeyCode::Char('n') => {
            if let Some(id) = app.selected_id() {
                app.notes_buffer = app.session.open_notes(&id);
                app.mode = Mode::Notes;
            }
        }
        KeyCode::Enter | KeyCode::Char('d') => {
            app.details_id = app.selected_id();
        }
        KeyCode::Char('/') => {
            app.search_input.clear();
            app.mode = Mode::Search;
        }
        KeyCode::Esc => app.last_search = None,
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.cards().len();
    if len == 0 {
        return;
    }
    let state = app.view_state();
    let cursor = state.cursor as isize + delta;
    state.cursor = cursor.clamp(0, len as isize - 1) as usize;
}

fn jump_top(app: &mut App) {
    let state = app.view_state();
    state.cursor = 0;
    state.scroll_offset = 0;
}

fn jump_bottom(app: &mut App) {
    let len = app.cards().len();
    app.view_state().cursor = len.saturating_sub(1);
}

fn select_plan(app: &mut App, plan: PlanKind) {
    app.session.select_plan(plan);
    app.clamp_cursor();
}

fn cycle_plan(app: &mut App) {
    let next = match app.session.view().plan() {
        PlanKind::Calendar => PlanKind::Chronological,
        PlanKind::Chronological => PlanKind::Nt90,
        PlanKind::Nt90 => PlanKind::Calendar,
    };
    select_plan(app, next);
}

/// Step the calendar month bar, wrapping at both ends. No-op in other plans.
fn shift_month(app: &mut App, delta: isize) {
    use crate::catalog::MONTHS;
    if let ViewSelection::Calendar(index) = app.session.view() {
        let count = MONTHS.len() as isize;
        let next = (index as isize + delta).rem_euclid(count) as usize;
        app.session.select_month(next);
        app.clamp_cursor();
    }
}
