//! Entry card grid rendering
//!
//! One rendering path for all themes. When the listing is empty only the
//! empty-state message is drawn — no grid markup at all.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::logic::entry::{display_name, is_directory};
use crate::logic::formatting::{format_size, format_uploaded};
use crate::logic::grid::is_selected;
use crate::logic::layout::calculate_grid_layout;
use crate::logic::navigation::scroll_to_cursor;
use crate::model::Model;
use crate::ui::icons::IconRenderer;
use crate::ui::theme::Theme;

/// Render the entry grid (or the empty-state placeholder) into `area`.
///
/// Also records the rendered geometry in the model so the mouse handler
/// and cursor movement agree with what is on screen.
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    model: &mut Model,
    icons: &IconRenderer,
    theme: &Theme,
) {
    model.ui.grid_area = (area.x, area.y, area.width, area.height);

    // Loading / error / empty states render a message and nothing else
    if model.listing.entries.is_empty() {
        let message = if model.listing.loading {
            "Loading…".to_string()
        } else if let Some(error) = &model.listing.error {
            format!("Listing failed: {}", error)
        } else {
            model.ui.empty_message.clone()
        };

        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(theme.empty_fg))
            .alignment(Alignment::Center);

        let message_area = Rect {
            x: area.x,
            y: area.y + area.height / 2,
            width: area.width,
            height: 1.min(area.height),
        };
        f.render_widget(placeholder, message_area);
        return;
    }

    let layout = calculate_grid_layout(area.width);
    model.ui.grid_columns = layout.columns;

    let visible_rows = (area.height / layout.cell_height).max(1) as usize;

    // Keep the cursor row in view
    if let Some(cursor) = model.navigation.cursor {
        let cursor_row = cursor / layout.columns;
        model.navigation.scroll_rows =
            scroll_to_cursor(model.navigation.scroll_rows, cursor_row, visible_rows);
    }
    let scroll_rows = model.navigation.scroll_rows;

    let count = model.listing.entries.len();
    let first_index = scroll_rows * layout.columns;
    let last_index = ((scroll_rows + visible_rows) * layout.columns).min(count);

    for index in first_index..last_index {
        let entry = &model.listing.entries[index];
        let row = index / layout.columns - scroll_rows;
        let col = index % layout.columns;

        let cell_area = Rect {
            x: area.x + col as u16 * layout.cell_width,
            y: area.y + row as u16 * layout.cell_height,
            width: layout.cell_width,
            height: layout.cell_height,
        };

        // A terminal shorter than one card row would put this cell outside
        // the buffer
        if cell_area.y + cell_area.height > area.y + area.height {
            continue;
        }

        let directory = is_directory(entry);
        let selected = is_selected(&entry.key, &model.navigation.selection);
        let focused = model.navigation.cursor == Some(index);

        let border_style = if focused {
            Style::default()
                .fg(theme.cursor_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if selected {
            block = block.style(theme.selected_style());
        }

        let name_style = if selected {
            theme.selected_style()
        } else if directory {
            Style::default()
                .fg(theme.directory_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.name_fg)
        };

        let icon_style = if selected {
            theme.selected_style()
        } else if directory {
            Style::default().fg(theme.directory_fg)
        } else {
            Style::default().fg(theme.file_fg)
        };

        let inner_width = layout.cell_width.saturating_sub(2) as usize;
        let icon = icons.glyph(entry.content_type());
        let name_width = inner_width.saturating_sub(icon.width() + 1);
        let name = truncate_to_width(display_name(&entry.key), name_width);

        let name_line = Line::from(vec![
            Span::styled(format!("{} ", icon), icon_style),
            Span::styled(name, name_style),
        ]);

        // Directory sizes are meaningless and never rendered
        let meta = if directory {
            format_uploaded(&entry.uploaded)
        } else {
            format!(
                "{}  {}",
                format_uploaded(&entry.uploaded),
                format_size(entry.size)
            )
        };
        let meta_style = if selected {
            theme.selected_style()
        } else {
            Style::default().fg(theme.meta_fg)
        };
        let meta_line = Line::from(Span::styled(
            truncate_to_width(&meta, inner_width),
            meta_style,
        ));

        let card = Paragraph::new(vec![name_line, meta_line]).block(block);
        f.render_widget(card, cell_area);
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}
