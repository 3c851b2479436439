//! Entry classification and display names
//!
//! Pure functions for deciding what a listed entry is and how to label it.

use crate::api::Entry;

/// Content-type sentinel the store uses to mark pseudo-directories.
pub const DIRECTORY_CONTENT_TYPE: &str = "application/x-directory";

/// Check whether an entry is a pseudo-directory
///
/// The content-type sentinel is the sole signal; key shape is deliberately
/// not consulted (a file may legitimately be named `archive/`-less `notes`
/// or carry dots and slashes in odd places).
///
/// # Examples
/// ```
/// use drivetui::api::{Entry, HttpMetadata};
/// use drivetui::logic::entry::is_directory;
///
/// let dir = Entry {
///     key: "photos".to_string(),
///     size: 0,
///     uploaded: String::new(),
///     http_metadata: HttpMetadata { content_type: "application/x-directory".to_string() },
///     custom_metadata: None,
/// };
/// assert!(is_directory(&dir));
/// ```
pub fn is_directory(entry: &Entry) -> bool {
    entry.content_type() == DIRECTORY_CONTENT_TYPE
}

/// Check whether a content type names an image
///
/// Missing or malformed content types are simply not images; this never
/// fails.
pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Extract the display name from a key
///
/// The last slash-delimited segment is the name. A trailing slash is
/// ignored so directory keys ending in `/` never produce an empty name,
/// and a key with no slash at all is its own name.
///
/// # Examples
/// ```
/// use drivetui::logic::entry::display_name;
///
/// assert_eq!(display_name("photos/2024/beach.jpg"), "beach.jpg");
/// assert_eq!(display_name("photos/2024/"), "2024");
/// assert_eq!(display_name("readme.txt"), "readme.txt");
/// ```
pub fn display_name(key: &str) -> &str {
    let trimmed = key.strip_suffix('/').unwrap_or(key);
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
