//! Content-type icon lookup
//!
//! Maps a content-type string to a visual glyph. Used whenever the preview
//! resolver yields no image surface.

use crate::logic::entry::DIRECTORY_CONTENT_TYPE;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 📄, etc.)
    NerdFont, // Nerd Fonts icons (U+E5FF, etc.)
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
}

impl IconRenderer {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a content type.
    ///
    /// Unknown and empty content types get the generic file glyph; this
    /// lookup never fails.
    pub fn glyph(&self, content_type: &str) -> &'static str {
        let (emoji, nerd) = Self::category(content_type);
        match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        }
    }

    fn category(content_type: &str) -> (&'static str, &'static str) {
        if content_type == DIRECTORY_CONTENT_TYPE {
            return ("📁", "\u{e5ff}");
        }
        if content_type.starts_with("image/") {
            return ("🖼️", "\u{f03e}");
        }
        if content_type.starts_with("video/") {
            return ("🎬", "\u{f03d}");
        }
        if content_type.starts_with("audio/") {
            return ("🎵", "\u{f001}");
        }
        if content_type.starts_with("text/") {
            return ("📝", "\u{f15c}");
        }
        match content_type {
            "application/pdf" => ("📕", "\u{f1c1}"),
            "application/zip"
            | "application/gzip"
            | "application/x-tar"
            | "application/x-7z-compressed" => ("🗜️", "\u{f1c6}"),
            "application/json" | "application/javascript" | "application/xml" => {
                ("📝", "\u{f121}")
            }
            _ => ("📄", "\u{f15b}"),
        }
    }
}
