//! Interaction core
//!
//! This module contains the pure interaction logic the rest of the
//! application is built around:
//! - entry: Entry classification and display names
//! - encoding: Segment-wise key encoding for addressable URLs
//! - grid: Activation dispatch and selection state
//! - preview: Preview surface resolution (thumbnail / image / icon)
//! - formatting: Human-readable sizes and timestamps
//! - layout: Grid geometry and hit testing
//! - navigation: Cursor movement and prefix arithmetic

pub mod encoding;
pub mod entry;
pub mod formatting;
pub mod grid;
pub mod layout;
pub mod navigation;
pub mod preview;
