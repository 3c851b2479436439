//! Screen layout
//!
//! Splits the terminal into the grid content area and the one-line status
//! bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct LayoutInfo {
    pub content_area: Rect,
    pub status_area: Rect,
}

pub fn calculate_layout(size: Rect) -> LayoutInfo {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(size);

    LayoutInfo {
        content_area: chunks[0],
        status_area: chunks[1],
    }
}
