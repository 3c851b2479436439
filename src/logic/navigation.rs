//! Cursor movement and prefix arithmetic
//!
//! Pure functions for moving the grid cursor and walking the working
//! directory, with no wrapping surprises at the edges.

/// Direction of one cursor movement across the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Calculate the next cursor index for a movement
///
/// Movement clamps at the grid edges rather than wrapping. With no current
/// cursor the first entry is selected; an empty grid has no cursor at all.
///
/// # Arguments
/// * `current` - Current cursor index (None if nothing focused)
/// * `count` - Total number of entries
/// * `columns` - Number of grid columns
/// * `direction` - Which way to move
///
/// # Examples
/// ```
/// use drivetui::logic::navigation::{move_cursor, Direction};
///
/// // Empty grid
/// assert_eq!(move_cursor(None, 0, 3, Direction::Right), None);
///
/// // No cursor yet: any movement focuses the first entry
/// assert_eq!(move_cursor(None, 9, 3, Direction::Down), Some(0));
///
/// // Down moves one row; clamped at the bottom
/// assert_eq!(move_cursor(Some(1), 9, 3, Direction::Down), Some(4));
/// assert_eq!(move_cursor(Some(7), 9, 3, Direction::Down), Some(7));
/// ```
pub fn move_cursor(
    current: Option<usize>,
    count: usize,
    columns: usize,
    direction: Direction,
) -> Option<usize> {
    if count == 0 || columns == 0 {
        return None;
    }

    let Some(current) = current else {
        return Some(0);
    };
    let current = current.min(count - 1);

    let next = match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(count - 1),
        Direction::Up => {
            if current >= columns {
                current - columns
            } else {
                current
            }
        }
        Direction::Down => {
            if current + columns < count {
                current + columns
            } else {
                current
            }
        }
    };

    Some(next)
}

/// Adjust the scroll offset so the cursor row stays visible
///
/// Returns the new first visible row. Scrolls up just enough when the
/// cursor is above the viewport and down just enough when below; otherwise
/// leaves the offset alone.
pub fn scroll_to_cursor(scroll_rows: usize, cursor_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return scroll_rows;
    }

    if cursor_row < scroll_rows {
        cursor_row
    } else if cursor_row >= scroll_rows + visible_rows {
        cursor_row + 1 - visible_rows
    } else {
        scroll_rows
    }
}

/// Parent prefix of a working directory
///
/// Walks one level up: `"photos/2024/"` becomes `"photos/"`, a top-level
/// prefix becomes the root `""`, and the root stays the root.
///
/// # Examples
/// ```
/// use drivetui::logic::navigation::parent_prefix;
///
/// assert_eq!(parent_prefix("photos/2024/"), "photos/");
/// assert_eq!(parent_prefix("photos/"), "");
/// assert_eq!(parent_prefix(""), "");
/// ```
pub fn parent_prefix(cwd: &str) -> String {
    let trimmed = cwd.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(pos) => trimmed[..=pos].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // CURSOR MOVEMENT
    // ========================================

    #[test]
    fn test_move_cursor_empty_grid() {
        assert_eq!(move_cursor(None, 0, 3, Direction::Right), None);
        assert_eq!(move_cursor(Some(2), 0, 3, Direction::Left), None);
    }

    #[test]
    fn test_move_cursor_focuses_first_when_unset() {
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(move_cursor(None, 5, 3, direction), Some(0));
        }
    }

    #[test]
    fn test_move_cursor_horizontal() {
        assert_eq!(move_cursor(Some(1), 9, 3, Direction::Right), Some(2));
        assert_eq!(move_cursor(Some(1), 9, 3, Direction::Left), Some(0));
    }

    #[test]
    fn test_move_cursor_horizontal_clamps() {
        assert_eq!(move_cursor(Some(0), 9, 3, Direction::Left), Some(0));
        assert_eq!(move_cursor(Some(8), 9, 3, Direction::Right), Some(8));
    }

    #[test]
    fn test_move_cursor_vertical() {
        // 3-column grid: down is +3, up is -3
        assert_eq!(move_cursor(Some(1), 9, 3, Direction::Down), Some(4));
        assert_eq!(move_cursor(Some(4), 9, 3, Direction::Up), Some(1));
    }

    #[test]
    fn test_move_cursor_vertical_clamps() {
        // Top row can't go up
        assert_eq!(move_cursor(Some(2), 9, 3, Direction::Up), Some(2));
        // Last row can't go down, even from a partial row
        assert_eq!(move_cursor(Some(7), 9, 3, Direction::Down), Some(7));
        // Down from a full row into a missing cell of a partial row stays put
        assert_eq!(move_cursor(Some(5), 7, 3, Direction::Down), Some(5));
    }

    #[test]
    fn test_move_cursor_out_of_bounds_recovers() {
        // A stale cursor past the end is pulled back in range first
        assert_eq!(move_cursor(Some(20), 5, 3, Direction::Left), Some(3));
    }

    // ========================================
    // SCROLLING
    // ========================================

    #[test]
    fn test_scroll_to_cursor_in_view_is_stable() {
        assert_eq!(scroll_to_cursor(2, 3, 4), 2);
        assert_eq!(scroll_to_cursor(2, 2, 4), 2);
        assert_eq!(scroll_to_cursor(2, 5, 4), 2);
    }

    #[test]
    fn test_scroll_to_cursor_above_viewport() {
        assert_eq!(scroll_to_cursor(5, 2, 4), 2);
    }

    #[test]
    fn test_scroll_to_cursor_below_viewport() {
        // Viewport shows rows 0..4, cursor on row 6: scroll to 3
        assert_eq!(scroll_to_cursor(0, 6, 4), 3);
    }

    #[test]
    fn test_scroll_to_cursor_zero_height() {
        assert_eq!(scroll_to_cursor(3, 10, 0), 3);
    }

    // ========================================
    // PREFIX ARITHMETIC
    // ========================================

    #[test]
    fn test_parent_prefix_nested() {
        assert_eq!(parent_prefix("a/b/c/"), "a/b/");
        assert_eq!(parent_prefix("photos/2024/"), "photos/");
    }

    #[test]
    fn test_parent_prefix_top_level() {
        assert_eq!(parent_prefix("photos/"), "");
    }

    #[test]
    fn test_parent_prefix_root() {
        assert_eq!(parent_prefix(""), "");
    }

    #[test]
    fn test_parent_prefix_without_trailing_slash() {
        // Tolerates a bare prefix too
        assert_eq!(parent_prefix("photos/2024"), "photos/");
    }
}
