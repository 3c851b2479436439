//! Keyboard Input Handler
//!
//! Maps keys onto cursor movement and the two activation paths. Enter is
//! the primary activation of the cursor entry; Space is the secondary
//! (always-toggle) activation, the keyboard's stand-in for a context
//! click.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::navigation::Direction;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // The preview popup swallows input until closed
    if app.model.ui.preview_popup.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('p') => {
                app.close_preview_popup();
            }
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }

        // Esc leaves multi-select mode; the set is discarded
        KeyCode::Esc => {
            app.model.navigation.selection.clear();
        }

        // Cursor movement (arrows and vim keys)
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),

        // Primary activation: toggle / descend / open, mode-dependent
        KeyCode::Enter => app.activate_cursor_primary(),

        // Secondary activation: always a toggle, enters multi-select
        KeyCode::Char(' ') => app.activate_cursor_secondary(),

        KeyCode::Backspace | KeyCode::Char('u') => app.ascend(),

        KeyCode::Char('r') => app.refresh(),

        KeyCode::Char('t') => app.cycle_theme(),

        KeyCode::Char('p') => app.open_preview_popup(),

        _ => {}
    }
}
