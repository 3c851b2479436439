//! Navigation state: working directory, cursor, selection

use crate::logic::grid::Selection;

/// Where the user is and what they have selected.
///
/// The working directory is a path prefix (`""` is the root, otherwise
/// always slash-terminated). The selection is the caller-owned state the
/// interaction core reads but never stores.
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Current working-directory prefix
    pub cwd: String,

    /// Grid cursor index (None when the listing is empty)
    pub cursor: Option<usize>,

    /// First visible card row (kept in sync with the cursor at render time)
    pub scroll_rows: usize,

    /// Selection state, Inactive or Active(set)
    pub selection: Selection,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            cwd: String::new(),
            cursor: None,
            scroll_rows: 0,
            selection: Selection::Inactive,
        }
    }

    /// Move into a new prefix, resetting cursor and scroll.
    ///
    /// The selection is left alone: bulk actions may span directories.
    pub fn enter(&mut self, prefix: String) {
        self.cwd = prefix;
        self.cursor = None;
        self.scroll_rows = 0;
    }

    /// Whether we are at the listing root.
    pub fn at_root(&self) -> bool {
        self.cwd.is_empty()
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
