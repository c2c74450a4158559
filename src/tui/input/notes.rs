use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub fn handle_notes(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.session.cancel_notes();
            app.notes_buffer.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.notes_buffer);
            app.session.save_notes(&text);
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.notes_buffer.pop();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.notes_buffer.clear();
        }
        KeyCode::Char(c) => {
            app.notes_buffer.push(c);
        }
        _ => {}
    }
}
