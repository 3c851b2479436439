//! Listing state for the current working directory

use crate::api::Entry;

/// Entries for the current prefix, plus fetch state.
///
/// Entries stay in server order; the grid never re-sorts them.
#[derive(Clone, Debug)]
pub struct ListingModel {
    /// Entries as the server returned them
    pub entries: Vec<Entry>,

    /// A listing request is in flight for the current prefix
    pub loading: bool,

    /// The last listing request failed with this message
    pub error: Option<String>,
}

impl ListingModel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Replace the listing with fresh results.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch; the stale entries are dropped so the error
    /// state renders alone rather than over a misleading grid.
    pub fn set_error(&mut self, message: String) {
        self.entries.clear();
        self.loading = false;
        self.error = Some(message);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ListingModel {
    fn default() -> Self {
        Self::new()
    }
}
