//! Tests for preview resolution precedence
//!
//! The resolver's order is load-bearing:
//!
//! 1. A stored thumbnail reference always wins — even when the entry is
//!    itself an image — because thumbnails are cheaper to transfer and
//!    already oriented and cropped.
//! 2. Without a thumbnail, `image/*` entries preview as themselves.
//! 3. Everything else gets no preview surface; the host falls back to the
//!    content-type icon.

use drivetui::api::{CustomMetadata, Entry, HttpMetadata};
use drivetui::logic::preview::{resolve_preview, Preview, THUMBNAIL_NAMESPACE};

fn entry(key: &str, content_type: &str, thumbnail: Option<&str>) -> Entry {
    Entry {
        key: key.to_string(),
        size: 2048,
        uploaded: "2024-06-01T12:30:00Z".to_string(),
        http_metadata: HttpMetadata {
            content_type: content_type.to_string(),
        },
        custom_metadata: thumbnail.map(|t| CustomMetadata {
            thumbnail: Some(t.to_string()),
        }),
    }
}

#[test]
fn test_thumbnail_reference_appears_verbatim_with_png_suffix() {
    // Property: for any entry with a thumbnail, the resolved path contains
    // exactly that reference and ends in .png, whatever the content type
    let cases = [
        entry("pic.jpg", "image/jpeg", Some("ref-1")),
        entry("clip.mp4", "video/mp4", Some("ref-2")),
        entry("doc.pdf", "application/pdf", Some("ref-3")),
        entry("odd", "", Some("ref-4")),
    ];

    for e in cases {
        let reference = e.thumbnail().unwrap().to_string();
        match resolve_preview(&e, "/webdav") {
            Preview::Thumbnail(url) => {
                assert!(
                    url.contains(&reference),
                    "thumbnail URL {:?} missing reference {:?}",
                    url,
                    reference
                );
                assert!(url.ends_with(".png"), "thumbnail URL {:?} not .png", url);
                assert!(url.contains(THUMBNAIL_NAMESPACE));
            }
            other => panic!("expected thumbnail for {:?}, got {:?}", e.key, other),
        }
    }
}

#[test]
fn test_image_without_thumbnail_is_its_own_preview() {
    let png = entry("shots/screen 1.png", "image/png", None);

    assert_eq!(
        resolve_preview(&png, "/webdav"),
        Preview::Image("/webdav/shots/screen%201.png".to_string())
    );
}

#[test]
fn test_pdf_gets_no_preview() {
    let pdf = entry("doc.pdf", "application/pdf", None);
    assert_eq!(resolve_preview(&pdf, "/webdav"), Preview::None);
}

#[test]
fn test_directory_gets_no_preview() {
    let dir = entry("photos", "application/x-directory", None);
    assert_eq!(resolve_preview(&dir, "/webdav"), Preview::None);
}

#[test]
fn test_missing_content_type_gets_no_preview() {
    let odd = entry("mystery", "", None);
    assert_eq!(resolve_preview(&odd, "/webdav"), Preview::None);
}

#[test]
fn test_preview_urls_share_the_mount() {
    let img = entry("pic.png", "image/png", None);
    let thumbed = entry("pic2.png", "image/png", Some("t9"));

    let full = resolve_preview(&img, "/files");
    let thumb = resolve_preview(&thumbed, "/files");

    assert_eq!(full.url().unwrap(), "/files/pic.png");
    assert_eq!(
        thumb.url().unwrap(),
        format!("/files/{}/thumbnails/t9.png", THUMBNAIL_NAMESPACE)
    );
}
