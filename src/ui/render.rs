use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::App;

use super::{grid, layout, preview, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let layout_info = layout::calculate_layout(f.area());
    let theme = Theme::preset(app.model.ui.theme_index);

    grid::render_grid(
        f,
        layout_info.content_area,
        &mut app.model,
        &app.icon_renderer,
        &theme,
    );

    status_bar::render_status_bar(f, layout_info.status_area, &app.model, &theme);

    if let Some(popup) = &app.model.ui.preview_popup {
        preview::render_preview_popup(
            f,
            popup,
            &mut app.image_state_map,
            &app.icon_renderer,
            &theme,
        );
    }

    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, f.area(), message);
    }
}
