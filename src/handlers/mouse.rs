//! Mouse Input Handler
//!
//! Left click on a card is the primary activation; right click is the
//! secondary activation and is consumed here outright, so there is no
//! default context behavior to suppress further. Clicks in dead space do
//! nothing.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::layout::calculate_grid_layout;
use crate::logic::navigation::Direction;
use crate::App;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // Any click closes the preview popup
    if app.model.ui.preview_popup.is_some() {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.close_preview_popup();
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = grid_index_at(app, mouse.column, mouse.row) {
                app.model.navigation.cursor = Some(index);
                app.activate_index_primary(index);
            }
        }

        MouseEventKind::Down(MouseButton::Right) => {
            if let Some(index) = grid_index_at(app, mouse.column, mouse.row) {
                app.model.navigation.cursor = Some(index);
                app.activate_index_secondary(index);
            }
        }

        MouseEventKind::ScrollUp => app.move_cursor(Direction::Up),
        MouseEventKind::ScrollDown => app.move_cursor(Direction::Down),

        _ => {}
    }
}

/// Map a terminal coordinate to an entry index using the last rendered
/// grid area.
fn grid_index_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let (x, y, width, height) = app.model.ui.grid_area;
    if width == 0 || height == 0 {
        return None;
    }
    if column < x || row < y || column >= x + width || row >= y + height {
        return None;
    }

    let layout = calculate_grid_layout(width);
    layout.hit_test(
        column - x,
        row - y,
        app.model.navigation.scroll_rows,
        app.model.listing.len(),
    )
}
