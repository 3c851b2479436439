// UI module - all TUI rendering using Ratatui
//
// Architecture:
// - theme: Color palettes; four presets over one rendering path
// - icons: Content-type icon lookup (emoji and Nerd Fonts)
// - layout: Splits the screen into content and status areas
// - grid: Renders the entry card grid (or the empty-state message)
// - status_bar: Renders the bottom status bar
// - preview: Renders the preview popup with terminal image protocols
// - toast: Renders toast notifications
// - render: Orchestrates all of the above

pub mod grid;
pub mod icons;
pub mod layout;
pub mod preview;
pub mod render;
pub mod status_bar;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
