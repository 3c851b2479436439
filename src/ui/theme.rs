//! Theme presets
//!
//! Four visually divergent palettes consumed by the single grid renderer.
//! Colors use the terminal palette so each theme still respects the
//! user's terminal color scheme.

use ratatui::style::{Color, Modifier, Style};

/// Number of built-in presets; `t` cycles through them at runtime.
pub const THEME_COUNT: usize = 4;

/// One palette for the whole interface.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Card colors
    pub border: Color,
    pub cursor_border: Color,
    pub name_fg: Color,
    pub meta_fg: Color,
    pub directory_fg: Color,
    pub file_fg: Color,

    // Selection colors
    pub selected_fg: Color,
    pub selected_bg: Color,

    // Chrome
    pub empty_fg: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Theme {
    /// Look up a preset by index (wraps around).
    pub fn preset(index: usize) -> Theme {
        match index % THEME_COUNT {
            0 => Theme {
                name: "slate",
                border: Color::DarkGray,
                cursor_border: Color::Cyan,
                name_fg: Color::White,
                meta_fg: Color::DarkGray,
                directory_fg: Color::Blue,
                file_fg: Color::Cyan,
                selected_fg: Color::Black,
                selected_bg: Color::Cyan,
                empty_fg: Color::DarkGray,
                status_fg: Color::White,
                status_bg: Color::DarkGray,
            },
            1 => Theme {
                name: "ocean",
                border: Color::Blue,
                cursor_border: Color::LightCyan,
                name_fg: Color::LightCyan,
                meta_fg: Color::Blue,
                directory_fg: Color::LightBlue,
                file_fg: Color::Cyan,
                selected_fg: Color::Black,
                selected_bg: Color::LightBlue,
                empty_fg: Color::Blue,
                status_fg: Color::White,
                status_bg: Color::Blue,
            },
            2 => Theme {
                name: "ember",
                border: Color::Red,
                cursor_border: Color::LightYellow,
                name_fg: Color::LightYellow,
                meta_fg: Color::Red,
                directory_fg: Color::Yellow,
                file_fg: Color::LightRed,
                selected_fg: Color::Black,
                selected_bg: Color::Yellow,
                empty_fg: Color::Red,
                status_fg: Color::Black,
                status_bg: Color::Yellow,
            },
            _ => Theme {
                name: "matrix",
                border: Color::Green,
                cursor_border: Color::LightGreen,
                name_fg: Color::LightGreen,
                meta_fg: Color::Green,
                directory_fg: Color::Green,
                file_fg: Color::LightGreen,
                selected_fg: Color::Black,
                selected_bg: Color::Green,
                empty_fg: Color::Green,
                status_fg: Color::LightGreen,
                status_bg: Color::Black,
            },
        }
    }

    /// Preset index for a configured theme name; unknown names get the
    /// first preset.
    pub fn index_by_name(name: &str) -> usize {
        match name.to_lowercase().as_str() {
            "slate" => 0,
            "ocean" => 1,
            "ember" => 2,
            "matrix" => 3,
            _ => 0,
        }
    }

    /// Style for a selected card.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }
}
