//! Grid geometry
//!
//! Pure functions for laying entry cards out in a column grid and mapping
//! terminal coordinates back to entry indices.

/// Minimum width of one entry card in terminal cells.
pub const MIN_CELL_WIDTH: u16 = 24;

/// Height of one entry card in terminal rows (borders + name + meta line).
pub const CELL_HEIGHT: u16 = 4;

/// Computed grid dimensions for a given content width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of card columns that fit.
    pub columns: usize,
    /// Width of each card in cells.
    pub cell_width: u16,
    /// Height of each card in rows.
    pub cell_height: u16,
}

/// Calculate the card grid for a content area width
///
/// Cards are at least [`MIN_CELL_WIDTH`] wide; leftover width is spread
/// across the columns. At least one column always fits, however narrow the
/// terminal.
///
/// # Examples
/// ```
/// use drivetui::logic::layout::calculate_grid_layout;
///
/// let layout = calculate_grid_layout(100);
/// assert_eq!(layout.columns, 4);
/// assert_eq!(layout.cell_width, 25);
///
/// // Narrower than one card still yields a single column
/// let narrow = calculate_grid_layout(10);
/// assert_eq!(narrow.columns, 1);
/// assert_eq!(narrow.cell_width, 10);
/// ```
pub fn calculate_grid_layout(content_width: u16) -> GridLayout {
    let columns = (content_width / MIN_CELL_WIDTH).max(1) as usize;
    let cell_width = content_width / columns as u16;

    GridLayout {
        columns,
        cell_width,
        cell_height: CELL_HEIGHT,
    }
}

impl GridLayout {
    /// Map a point (relative to the grid area origin) to an entry index
    ///
    /// `scroll_rows` is the number of card rows scrolled off the top;
    /// `count` is the number of entries. Points in the dead space to the
    /// right of the last column, or past the last entry, miss.
    pub fn hit_test(
        &self,
        local_x: u16,
        local_y: u16,
        scroll_rows: usize,
        count: usize,
    ) -> Option<usize> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }

        let col = (local_x / self.cell_width) as usize;
        if col >= self.columns {
            return None;
        }

        let row = (local_y / self.cell_height) as usize + scroll_rows;
        let index = row * self.columns + col;

        if index < count {
            Some(index)
        } else {
            None
        }
    }

    /// Total card rows needed for `count` entries.
    pub fn total_rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }
}
