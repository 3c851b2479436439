//! Formatting and display logic
//!
//! Pure functions for formatting entry metadata for human-readable display.

/// Format a byte count into a human-readable string (e.g., "1.20 KB", "5.33 MB")
///
/// Only meaningful for non-directory entries; directory sizes are never
/// rendered and callers must not pass them here expecting sense.
///
/// # Examples
/// ```
/// use drivetui::logic::formatting::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format an uploaded timestamp for display
///
/// Parses the store's RFC 3339 timestamps; anything unparsable is shown
/// as-is rather than crashing or hiding the entry.
pub fn format_uploaded(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024.00 KB");
    }

    #[test]
    fn test_format_size_larger_units() {
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
        assert_eq!(format_size(2 * 1024 * 1024 * 1024 * 1024), "2.00 TB");
    }

    #[test]
    fn test_format_uploaded_rfc3339() {
        assert_eq!(format_uploaded("2024-06-01T12:30:00Z"), "2024-06-01 12:30");
        assert_eq!(
            format_uploaded("2024-06-01T12:30:00+02:00"),
            "2024-06-01 12:30"
        );
    }

    #[test]
    fn test_format_uploaded_unparsable_passes_through() {
        assert_eq!(format_uploaded("yesterday"), "yesterday");
        assert_eq!(format_uploaded(""), "");
    }
}
