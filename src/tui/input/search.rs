use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            if !app.search_input.is_empty() {
                app.last_search = Some(std::mem::take(&mut app.search_input));
            } else {
                app.search_input.clear();
            }
            app.mode = Mode::Navigate;
            jump_to_match(app);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

/// Move the cursor to the next card matching the active search, scanning
/// forward from the cursor and wrapping. Repeating the search cycles.
pub fn jump_to_match(app: &mut App) {
    let Some(re) = app.active_search_re() else {
        return;
    };
    let cards = app.cards();
    if cards.is_empty() {
        return;
    }
    let start = app.view_state().cursor + 1;
    for step in 0..cards.len() {
        let index = (start + step) % cards.len();
        let card = &cards[index];
        let matched = re.is_match(&card.id)
            || re.is_match(&card.title)
            || card.body.iter().any(|line| re.is_match(line));
        if matched {
            app.view_state().cursor = index;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_search(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn search_for(app: &mut App, text: &str) {
        app.mode = Mode::Search;
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn commit_jumps_to_first_match() {
        let (mut app, _tmp) = test_app();
        // Meskerem day 3 is the first card mentioning Babel
        search_for(&mut app, "babel");
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.last_search.as_deref(), Some("babel"));
        assert_eq!(app.view_state().cursor, 2);
    }

    #[test]
    fn repeating_search_cycles_and_wraps() {
        let (mut app, _tmp) = test_app();
        search_for(&mut app, "genesis");
        let first = app.view_state().cursor;
        search_for(&mut app, "genesis");
        assert!(app.view_state().cursor > first);

        // From the last card, the search wraps back to the top
        app.view_state().cursor = app.cards().len() - 1;
        search_for(&mut app, "genesis");
        assert_eq!(app.view_state().cursor, 0);
    }

    #[test]
    fn escape_cancels_without_committing() {
        let (mut app, _tmp) = test_app();
        app.mode = Mode::Search;
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.last_search, None);
        assert!(app.search_input.is_empty());
    }
}
