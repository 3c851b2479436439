//! Preview popup
//!
//! A centered modal with entry metadata on the left and, when the resolver
//! chose an image surface, the decoded preview on the right rendered with
//! the terminal's image protocol.

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use crate::logic::formatting::{format_size, format_uploaded};
use crate::logic::preview::Preview;
use crate::model::PreviewPopupState;
use crate::ui::icons::IconRenderer;
use crate::ui::theme::Theme;
use crate::ImagePreviewState;

/// Render the preview popup for one entry.
pub fn render_preview_popup(
    f: &mut Frame,
    popup: &PreviewPopupState,
    image_states: &mut HashMap<String, ImagePreviewState>,
    icons: &IconRenderer,
    theme: &Theme,
) {
    let area = centered_rect(f.area(), 80, 80);

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", popup.display_name))
        .border_style(Style::default().fg(theme.cursor_border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks =
        Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).split(inner);

    render_metadata(f, chunks[0], popup, image_states, theme);
    render_surface(f, chunks[1], popup, image_states, icons, theme);
}

fn render_metadata(
    f: &mut Frame,
    area: Rect,
    popup: &PreviewPopupState,
    image_states: &HashMap<String, ImagePreviewState>,
    theme: &Theme,
) {
    let label = Style::default().fg(theme.meta_fg);
    let value = Style::default().fg(theme.name_fg);

    let type_text = if popup.is_directory {
        "directory".to_string()
    } else if popup.content_type.is_empty() {
        "unknown".to_string()
    } else {
        popup.content_type.clone()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type:     ", label),
            Span::styled(type_text, value),
        ]),
        Line::from(vec![
            Span::styled("Uploaded: ", label),
            Span::styled(format_uploaded(&popup.uploaded), value),
        ]),
    ];

    if !popup.is_directory {
        lines.push(Line::from(vec![
            Span::styled("Size:     ", label),
            Span::styled(format_size(popup.size), value),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Key:      ", label),
        Span::styled(popup.key.clone(), value),
    ]));

    let source = match &popup.preview {
        Preview::Thumbnail(_) => "stored thumbnail",
        Preview::Image(_) => "full image",
        Preview::None => "none",
    };
    lines.push(Line::from(vec![
        Span::styled("Preview:  ", label),
        Span::styled(source, value),
    ]));

    // Decoded image details once they are known
    if let Some(ImagePreviewState::Ready { metadata, .. }) = image_states.get(&popup.key) {
        if let Some((w, h)) = metadata.dimensions {
            lines.push(Line::from(vec![
                Span::styled("Pixels:   ", label),
                Span::styled(format!("{}x{}", w, h), value),
            ]));
        }
        if let Some(format) = &metadata.format {
            lines.push(Line::from(vec![
                Span::styled("Format:   ", label),
                Span::styled(format.clone(), value),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_surface(
    f: &mut Frame,
    area: Rect,
    popup: &PreviewPopupState,
    image_states: &mut HashMap<String, ImagePreviewState>,
    icons: &IconRenderer,
    theme: &Theme,
) {
    match image_states.get_mut(&popup.key) {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), area, protocol);
        }
        Some(ImagePreviewState::Loading) => {
            render_centered_message(f, area, "Loading preview…", theme);
        }
        Some(ImagePreviewState::Failed { .. }) => {
            render_centered_message(f, area, "Preview unavailable", theme);
        }
        None => {
            // The resolver chose no surface: show the type icon instead
            let glyph = icons.glyph(&popup.content_type);
            render_centered_message(f, area, &format!("{}  no preview", glyph), theme);
        }
    }
}

fn render_centered_message(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let paragraph = Paragraph::new(message)
        .style(
            Style::default()
                .fg(theme.empty_fg)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(ratatui::layout::Alignment::Center);

    let message_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    };
    f.render_widget(paragraph, message_area);
}

/// A rect centered in `area` taking the given percentages of each axis.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
