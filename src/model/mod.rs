//! Pure application model
//!
//! Cloneable state for the application, organized into focused sub-models:
//!
//! - **ListingModel**: entries for the current prefix, loading/error state
//! - **NavigationModel**: working directory, grid cursor, selection
//! - **UiModel**: theme, toast, preview popup, quit flag
//!
//! All I/O lives outside the model; helper methods here are side-effect
//! free projections of the current snapshot.

pub mod listing;
pub mod navigation;
pub mod ui;

pub use listing::ListingModel;
pub use navigation::NavigationModel;
pub use ui::{PreviewPopupState, UiModel};

use crate::api::Entry;

/// Root application model composed of focused sub-models.
#[derive(Clone, Debug)]
pub struct Model {
    /// Entries for the current working directory
    pub listing: ListingModel,

    /// Working directory, cursor, selection
    pub navigation: NavigationModel,

    /// Theme, toast, popups
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self {
            listing: ListingModel::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Entry under the grid cursor, if any.
    pub fn cursor_entry(&self) -> Option<&Entry> {
        self.navigation
            .cursor
            .and_then(|idx| self.listing.entries.get(idx))
    }

    /// Entry at an arbitrary grid index.
    pub fn entry_at(&self, index: usize) -> Option<&Entry> {
        self.listing.entries.get(index)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
