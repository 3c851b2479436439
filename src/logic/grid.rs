//! Activation dispatch and selection state
//!
//! The heart of the interaction model: pure functions from (entry,
//! selection snapshot) to exactly one activation intent. The caller owns
//! the selection and the working directory; nothing here holds state.

use std::collections::BTreeSet;

use crate::api::Entry;

use super::entry::is_directory;
use super::preview::resource_url;

/// Caller-owned selection state.
///
/// A tagged two-mode value rather than a nullable set: `Inactive` means
/// clicks navigate or open, `Active` means every activation toggles
/// membership. The grid never switches the mode itself; it only emits
/// [`Activation::Toggle`] intents and the caller decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Single-activation mode: primary clicks descend or open.
    Inactive,
    /// Multi-select mode with the set of selected keys.
    Active(BTreeSet<String>),
}

impl Selection {
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Active(_))
    }

    /// Exact-equality membership test; always false in `Inactive` mode.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Selection::Inactive => false,
            Selection::Active(keys) => keys.contains(key),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Inactive => 0,
            Selection::Active(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Toggle a key, entering multi-select mode on the first toggle.
    ///
    /// Toggling is idempotent in the remove-then-add sense: toggling a key
    /// twice restores the previous membership, and toggling a key that is
    /// absent simply adds it — never an error. Removing the last key keeps
    /// the mode `Active`; only [`Selection::clear`] leaves it.
    pub fn toggle(&mut self, key: &str) {
        match self {
            Selection::Inactive => {
                let mut keys = BTreeSet::new();
                keys.insert(key.to_string());
                *self = Selection::Active(keys);
            }
            Selection::Active(keys) => {
                if !keys.remove(key) {
                    keys.insert(key.to_string());
                }
            }
        }
    }

    /// Drop back to single-activation mode, discarding the set.
    pub fn clear(&mut self) {
        *self = Selection::Inactive;
    }

    /// Selected keys in stable (sorted) order; empty when inactive.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Selection::Inactive => Vec::new(),
            Selection::Active(keys) => keys.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Inactive
    }
}

/// The single intent one activation produces.
///
/// Every activation yields exactly one of these — never zero, never two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Toggle this key in the caller's selection set.
    Toggle(String),
    /// Change the working directory to this prefix (trailing slash included).
    Descend(String),
    /// Open this resolved resource URL in an external, isolated context.
    Open(String),
}

/// Dispatch a primary activation (click / Enter)
///
/// - selection active: toggle, directory or not;
/// - else directory: descend to the key with a trailing slash;
/// - else: open the entry's resolved resource URL.
///
/// # Examples
/// ```
/// use drivetui::api::{Entry, HttpMetadata};
/// use drivetui::logic::grid::{primary_activation, Activation, Selection};
///
/// let dir = Entry {
///     key: "photos".to_string(),
///     size: 0,
///     uploaded: String::new(),
///     http_metadata: HttpMetadata { content_type: "application/x-directory".to_string() },
///     custom_metadata: None,
/// };
/// assert_eq!(
///     primary_activation(&dir, &Selection::Inactive, "/webdav"),
///     Activation::Descend("photos/".to_string())
/// );
/// ```
pub fn primary_activation(entry: &Entry, selection: &Selection, mount: &str) -> Activation {
    if selection.is_active() {
        Activation::Toggle(entry.key.clone())
    } else if is_directory(entry) {
        Activation::Descend(descend_target(&entry.key))
    } else {
        Activation::Open(resource_url(mount, &entry.key))
    }
}

/// Dispatch a secondary activation (context click / mark key)
///
/// Always a toggle, regardless of mode. This is the sole path into
/// multi-select from a fresh `Inactive` state: the caller observes the
/// first toggle and switches modes.
pub fn secondary_activation(entry: &Entry) -> Activation {
    Activation::Toggle(entry.key.clone())
}

/// Working-directory target for descending into a directory key.
///
/// Appends the trailing slash only if absent, so keys that already end in
/// `/` never get it doubled.
pub fn descend_target(key: &str) -> String {
    if key.ends_with('/') {
        key.to_string()
    } else {
        format!("{}/", key)
    }
}

/// Whether an entry renders as selected: selection active and key present.
pub fn is_selected(key: &str, selection: &Selection) -> bool {
    selection.contains(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CustomMetadata, Entry, HttpMetadata};

    fn entry(key: &str, content_type: &str) -> Entry {
        Entry {
            key: key.to_string(),
            size: 100,
            uploaded: "2024-06-01T12:30:00Z".to_string(),
            http_metadata: HttpMetadata {
                content_type: content_type.to_string(),
            },
            custom_metadata: None,
        }
    }

    fn active(keys: &[&str]) -> Selection {
        Selection::Active(keys.iter().map(|k| k.to_string()).collect())
    }

    // ========================================
    // PRIMARY ACTIVATION
    // ========================================

    #[test]
    fn test_primary_file_opens_resource_url() {
        let file = entry("docs/report 2024.pdf", "application/pdf");
        assert_eq!(
            primary_activation(&file, &Selection::Inactive, "/webdav"),
            Activation::Open("/webdav/docs/report%202024.pdf".to_string())
        );
    }

    #[test]
    fn test_primary_directory_descends_with_trailing_slash() {
        let dir = entry("photos", "application/x-directory");
        assert_eq!(
            primary_activation(&dir, &Selection::Inactive, "/webdav"),
            Activation::Descend("photos/".to_string())
        );
    }

    #[test]
    fn test_primary_directory_slash_not_doubled() {
        let dir = entry("photos/", "application/x-directory");
        assert_eq!(
            primary_activation(&dir, &Selection::Inactive, "/webdav"),
            Activation::Descend("photos/".to_string())
        );
    }

    #[test]
    fn test_primary_in_multi_select_always_toggles() {
        let selection = active(&["a.txt"]);

        // Files toggle
        let file = entry("b.txt", "text/plain");
        assert_eq!(
            primary_activation(&file, &selection, "/webdav"),
            Activation::Toggle("b.txt".to_string())
        );

        // Directories toggle too, never descend
        let dir = entry("photos", "application/x-directory");
        assert_eq!(
            primary_activation(&dir, &selection, "/webdav"),
            Activation::Toggle("photos".to_string())
        );
    }

    #[test]
    fn test_primary_toggles_even_with_empty_active_set() {
        let file = entry("b.txt", "text/plain");
        assert_eq!(
            primary_activation(&file, &active(&[]), "/webdav"),
            Activation::Toggle("b.txt".to_string())
        );
    }

    #[test]
    fn test_primary_missing_content_type_opens() {
        // Malformed metadata is "not a directory": falls through to open
        let odd = entry("mystery", "");
        assert_eq!(
            primary_activation(&odd, &Selection::Inactive, "/webdav"),
            Activation::Open("/webdav/mystery".to_string())
        );
    }

    #[test]
    fn test_thumbnail_metadata_does_not_change_dispatch() {
        let mut img = entry("pic.png", "image/png");
        img.custom_metadata = Some(CustomMetadata {
            thumbnail: Some("ref".to_string()),
        });
        assert_eq!(
            primary_activation(&img, &Selection::Inactive, "/webdav"),
            Activation::Open("/webdav/pic.png".to_string())
        );
    }

    // ========================================
    // SECONDARY ACTIVATION
    // ========================================

    #[test]
    fn test_secondary_always_toggles() {
        let file = entry("a.txt", "text/plain");
        let dir = entry("photos", "application/x-directory");

        assert_eq!(
            secondary_activation(&file),
            Activation::Toggle("a.txt".to_string())
        );
        assert_eq!(
            secondary_activation(&dir),
            Activation::Toggle("photos".to_string())
        );
    }

    // ========================================
    // SELECTION STATE
    // ========================================

    #[test]
    fn test_first_toggle_enters_multi_select() {
        let mut selection = Selection::Inactive;
        selection.toggle("a.txt");

        assert!(selection.is_active());
        assert!(selection.contains("a.txt"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut selection = active(&["a.txt", "b.txt"]);

        selection.toggle("a.txt");
        assert!(!selection.contains("a.txt"));
        assert!(selection.contains("b.txt"));

        selection.toggle("a.txt");
        assert!(selection.contains("a.txt"));
    }

    #[test]
    fn test_toggle_absent_key_adds_it() {
        let mut selection = active(&["a.txt"]);
        selection.toggle("new.txt");
        assert!(selection.contains("new.txt"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_removing_last_key_stays_active() {
        let mut selection = active(&["a.txt"]);
        selection.toggle("a.txt");

        assert!(selection.is_active());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear_leaves_multi_select() {
        let mut selection = active(&["a.txt", "b.txt"]);
        selection.clear();
        assert_eq!(selection, Selection::Inactive);
    }

    #[test]
    fn test_is_selected_requires_active_and_member() {
        assert!(!is_selected("a.txt", &Selection::Inactive));
        assert!(is_selected("a.txt", &active(&["a.txt"])));
        assert!(!is_selected("b.txt", &active(&["a.txt"])));
        // Exact string equality, no prefix tricks
        assert!(!is_selected("a.txt.bak", &active(&["a.txt"])));
        assert!(!is_selected("a", &active(&["a.txt"])));
    }

    #[test]
    fn test_keys_are_sorted() {
        let selection = active(&["zebra.txt", "apple.txt", "mango.txt"]);
        assert_eq!(selection.keys(), vec!["apple.txt", "mango.txt", "zebra.txt"]);
    }

    // ========================================
    // DESCEND TARGET
    // ========================================

    #[test]
    fn test_descend_target_appends_once() {
        assert_eq!(descend_target("photos"), "photos/");
        assert_eq!(descend_target("photos/"), "photos/");
        assert_eq!(descend_target("a/b/c"), "a/b/c/");
    }
}
