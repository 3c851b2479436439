//! Tests for activation dispatch
//!
//! Every primary activation must produce exactly one intent out of
//! {toggle, directory change, open} — never zero, never two — and which
//! one depends only on the selection mode and the entry's classification:
//!
//! - selection active: always a toggle, directories included
//! - selection inactive + directory: a working-directory change with a
//!   trailing slash (never doubled)
//! - selection inactive + file: an open of the resolved resource URL
//!
//! Classification itself must follow the content-type sentinel alone.

use drivetui::api::{CustomMetadata, Entry, HttpMetadata};
use drivetui::logic::entry::is_directory;
use drivetui::logic::grid::{
    primary_activation, secondary_activation, Activation, Selection,
};

/// Helper: build an entry with the given key and content type
fn entry(key: &str, content_type: &str) -> Entry {
    Entry {
        key: key.to_string(),
        size: 1024,
        uploaded: "2024-06-01T12:30:00Z".to_string(),
        http_metadata: HttpMetadata {
            content_type: content_type.to_string(),
        },
        custom_metadata: None,
    }
}

fn selection_of(keys: &[&str]) -> Selection {
    Selection::Active(keys.iter().map(|k| k.to_string()).collect())
}

#[test]
fn test_classification_follows_sentinel_exactly() {
    let cases = [
        ("application/x-directory", true),
        ("application/x-directory-ish", false),
        ("image/png", false),
        ("", false),
    ];

    for (content_type, expected) in cases {
        let e = entry("some/key", content_type);
        assert_eq!(
            is_directory(&e),
            expected,
            "content type {:?} misclassified",
            content_type
        );
    }
}

#[test]
fn test_directory_click_yields_single_cwd_change() {
    let dir = entry("photos", "application/x-directory");

    let activation = primary_activation(&dir, &Selection::Inactive, "/webdav");

    // Exactly one intent, and it is the directory change
    assert_eq!(activation, Activation::Descend("photos/".to_string()));
}

#[test]
fn test_directory_key_with_trailing_slash_is_idempotent() {
    let dir = entry("photos/", "application/x-directory");

    let activation = primary_activation(&dir, &Selection::Inactive, "/webdav");

    assert_eq!(activation, Activation::Descend("photos/".to_string()));
}

#[test]
fn test_file_click_opens_encoded_resource_url() {
    let file = entry("docs/q3 report.pdf", "application/pdf");

    let activation = primary_activation(&file, &Selection::Inactive, "/webdav");

    // Segments are encoded independently; the separator survives
    assert_eq!(
        activation,
        Activation::Open("/webdav/docs/q3%20report.pdf".to_string())
    );
}

#[test]
fn test_selection_mode_click_toggles_instead_of_navigating() {
    // Selection = ["a.txt"], entries = ["a.txt", "b.txt"]; clicking b.txt
    // must toggle b.txt only — never navigate, never open
    let selection = selection_of(&["a.txt"]);
    let b = entry("b.txt", "text/plain");

    let activation = primary_activation(&b, &selection, "/webdav");

    assert_eq!(activation, Activation::Toggle("b.txt".to_string()));
}

#[test]
fn test_selection_mode_swallows_directory_descent() {
    let selection = selection_of(&["a.txt"]);
    let dir = entry("photos", "application/x-directory");

    let activation = primary_activation(&dir, &selection, "/webdav");

    assert_eq!(activation, Activation::Toggle("photos".to_string()));
}

#[test]
fn test_missing_content_type_never_crashes_dispatch() {
    let odd = entry("mystery-blob", "");

    // Not a directory, not an image: falls through to open
    let activation = primary_activation(&odd, &Selection::Inactive, "/webdav");

    assert_eq!(
        activation,
        Activation::Open("/webdav/mystery-blob".to_string())
    );
}

#[test]
fn test_secondary_activation_toggles_in_both_modes() {
    let file = entry("a.txt", "text/plain");

    assert_eq!(
        secondary_activation(&file),
        Activation::Toggle("a.txt".to_string())
    );

    // Same result with a selection already active; the mode is irrelevant
    let dir = entry("photos", "application/x-directory");
    assert_eq!(
        secondary_activation(&dir),
        Activation::Toggle("photos".to_string())
    );
}

#[test]
fn test_thumbnail_metadata_is_inert_for_dispatch() {
    let mut img = entry("pic.jpg", "image/jpeg");
    img.custom_metadata = Some(CustomMetadata {
        thumbnail: Some("abc123".to_string()),
    });

    let activation = primary_activation(&img, &Selection::Inactive, "/webdav");

    assert_eq!(activation, Activation::Open("/webdav/pic.jpg".to_string()));
}
