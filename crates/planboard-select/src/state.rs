//! Interactive state owned by one control instance.

use serde::Serialize;

/// Open/closed flag and the text typed into the search box.
///
/// Closing always clears the search term, so reopening starts from the full
/// option list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectState {
    /// Whether the option overlay is shown.
    pub is_open: bool,
    /// Text typed into the search box.
    pub search_term: String,
}

impl SelectState {
    /// Opens the overlay.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the overlay and clears the search term.
    pub fn close(&mut self) {
        self.is_open = false;
        self.search_term.clear();
    }
}
