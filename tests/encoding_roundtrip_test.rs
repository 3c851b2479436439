//! Tests for the key-encoding round-trip law
//!
//! For all keys k, decoding each segment of `encode_key(k)` with a
//! standard URL decoder and rejoining with `/` must yield k exactly. The
//! segment structure (the number and position of separators) must survive
//! encoding untouched — encoding the key as one opaque string would break
//! both properties.

use drivetui::logic::encoding::encode_key;

fn decode_segments(encoded: &str) -> String {
    encoded
        .split('/')
        .map(|segment| urlencoding::decode(segment).unwrap().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[test]
fn test_round_trip_spaces_hash_question_unicode() {
    // The characters the contract calls out explicitly
    let keys = [
        "file with spaces.txt",
        "notes#2024.md",
        "what?.txt",
        "Ünïcode/földér/fïle.txt",
        "日本語/ファイル.txt",
    ];

    for key in keys {
        assert_eq!(
            decode_segments(&encode_key(key)),
            key,
            "round trip failed for {:?}",
            key
        );
    }
}

#[test]
fn test_separator_count_is_preserved() {
    let keys = ["a/b/c", "a b/c d/e f", "one", "x/y/z/w/v"];

    for key in keys {
        let encoded = encode_key(key);
        assert_eq!(
            encoded.matches('/').count(),
            key.matches('/').count(),
            "separator count changed for {:?}",
            key
        );
    }
}

#[test]
fn test_reserved_characters_do_not_leak_into_segments() {
    // Characters that would corrupt a URL if left raw
    let encoded = encode_key("a&b=c/d?e#f");
    let first_segment = encoded.split('/').next().unwrap();

    for forbidden in ['&', '=', '?', '#'] {
        assert!(
            !first_segment.contains(forbidden),
            "{:?} leaked into segment {:?}",
            forbidden,
            first_segment
        );
    }
}

#[test]
fn test_whole_key_encoding_would_differ() {
    // Sanity check on the contract's "do not encode the whole key" rule:
    // segment-wise output keeps the slash, whole-key output would not
    let key = "dir with space/file.txt";
    let segmentwise = encode_key(key);
    let opaque = urlencoding::encode(key).into_owned();

    assert!(segmentwise.contains('/'));
    assert!(!opaque.contains('/'));
    assert_ne!(segmentwise, opaque);
}
