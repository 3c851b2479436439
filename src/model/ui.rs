//! UI state: theme, toast, preview popup

use std::time::Instant;

use crate::logic::preview::Preview;

/// Preview popup contents for one entry.
///
/// Terminal image protocol state is not cloneable and lives in the runtime
/// keyed by `key`; this holds everything else the popup renders.
#[derive(Clone, Debug)]
pub struct PreviewPopupState {
    pub key: String,
    pub display_name: String,
    pub content_type: String,
    pub size: u64,
    pub uploaded: String,
    pub is_directory: bool,
    /// The surface the resolver chose for this entry
    pub preview: Preview,
}

/// Theme, transient notices and modal state.
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Index into the built-in theme presets
    pub theme_index: usize,

    /// Placeholder rendered when the listing has no entries
    pub empty_message: String,

    /// Toast notification (message, shown-at)
    pub toast_message: Option<(String, Instant)>,

    /// Preview popup, if open
    pub preview_popup: Option<PreviewPopupState>,

    /// Column count of the last rendered grid (for cursor movement)
    pub grid_columns: usize,

    /// Area of the last rendered grid: (x, y, width, height)
    pub grid_area: (u16, u16, u16, u16),

    /// Quit requested
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            theme_index: 0,
            empty_message: "This folder is empty".to_string(),
            toast_message: None,
            preview_popup: None,
            grid_columns: 1,
            grid_area: (0, 0, 0, 0),
            should_quit: false,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.preview_popup.is_some()
    }

    /// Show toast notification
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed (after 1.5 seconds)
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, shown_at)| shown_at.elapsed().as_millis() >= 1500)
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiModel::new();
        assert!(ui.toast_message.is_none());

        ui.show_toast("Saved".to_string());
        assert!(ui.toast_message.is_some());
        assert!(!ui.should_dismiss_toast());

        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
    }

    #[test]
    fn test_has_modal() {
        let mut ui = UiModel::new();
        assert!(!ui.has_modal());

        ui.preview_popup = Some(PreviewPopupState {
            key: "a.png".to_string(),
            display_name: "a.png".to_string(),
            content_type: "image/png".to_string(),
            size: 1,
            uploaded: String::new(),
            is_directory: false,
            preview: Preview::None,
        });
        assert!(ui.has_modal());
    }
}
