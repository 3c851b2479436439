//! Preview surface resolution
//!
//! Decides, per entry, whether to show a stored thumbnail, the full image,
//! or nothing (the caller then falls back to a content-type icon). Also
//! owns the URL schemes for the resource and thumbnail endpoints.

use crate::api::Entry;

use super::encoding::encode_key;
use super::entry::is_image_type;

/// Reserved namespace under the mount where the store keeps generated
/// thumbnails. No user key can begin with this prefix.
pub const THUMBNAIL_NAMESPACE: &str = "_$drive$";

/// The preview surface chosen for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// A precomputed thumbnail stored by the server.
    Thumbnail(String),
    /// The entry's own bytes, used as a full-image preview.
    Image(String),
    /// No preview; render the content-type icon instead.
    None,
}

impl Preview {
    /// The URL to fetch, if this preview has one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Preview::Thumbnail(url) | Preview::Image(url) => Some(url),
            Preview::None => None,
        }
    }
}

/// Site-relative URL for an entry's underlying content.
///
/// Used both to open the entry and to display it as its own full-image
/// preview.
pub fn resource_url(mount: &str, key: &str) -> String {
    format!("{}/{}", mount.trim_end_matches('/'), encode_key(key))
}

/// Site-relative URL for a stored thumbnail reference.
pub fn thumbnail_url(mount: &str, reference: &str) -> String {
    format!(
        "{}/{}/thumbnails/{}.png",
        mount.trim_end_matches('/'),
        THUMBNAIL_NAMESPACE,
        reference
    )
}

/// Resolve the preview surface for an entry
///
/// Precedence is load-bearing: a stored thumbnail always beats decoding
/// the full original, even when the original is itself an image —
/// thumbnails are cheaper to transfer and already oriented and cropped.
///
/// # Examples
/// ```
/// use drivetui::api::{Entry, HttpMetadata};
/// use drivetui::logic::preview::{resolve_preview, Preview};
///
/// let pdf = Entry {
///     key: "doc.pdf".to_string(),
///     size: 0,
///     uploaded: String::new(),
///     http_metadata: HttpMetadata { content_type: "application/pdf".to_string() },
///     custom_metadata: None,
/// };
/// assert_eq!(resolve_preview(&pdf, "/webdav"), Preview::None);
/// ```
pub fn resolve_preview(entry: &Entry, mount: &str) -> Preview {
    if let Some(reference) = entry.thumbnail() {
        Preview::Thumbnail(thumbnail_url(mount, reference))
    } else if is_image_type(entry.content_type()) {
        Preview::Image(resource_url(mount, &entry.key))
    } else {
        Preview::None
    }
}
