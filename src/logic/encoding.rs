//! Key encoding for addressable URLs
//!
//! Pure functions for turning slash-separated keys into URL path segments.

/// Percent-encode a key one segment at a time
///
/// Each slash-delimited segment is encoded independently and the segments
/// are rejoined with literal slashes, so the path hierarchy survives in the
/// URL while special characters inside a segment are escaped. Encoding the
/// whole key in one pass would escape the separators too and flatten the
/// hierarchy, which the resource endpoint would not understand.
///
/// # Examples
/// ```
/// use drivetui::logic::encoding::encode_key;
///
/// assert_eq!(encode_key("photos/beach day.jpg"), "photos/beach%20day.jpg");
/// assert_eq!(encode_key("a#b/c?d"), "a%23b/c%3Fd");
/// assert_eq!(encode_key("plain/path.txt"), "plain/path.txt");
/// ```
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
