use std::path::{Path, PathBuf};

use crate::domain::entry::Entry;

/// Opaque handle to whatever view the picker replaced.
///
/// The core never inspects it; it only hands it back to the host on cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContextHandle(pub u64);

/// Live state of one picker invocation.
///
/// Selection and the last applied query live with their controllers; this
/// struct holds the listing data that navigation replaces wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Full listing of `origin_directory`, headed by the "go up" entry.
    pub all_entries: Vec<Entry>,
    /// Absolute directory currently being browsed.
    pub origin_directory: PathBuf,
    /// View to hand back to the host on cancel.
    pub previous_context: ContextHandle,
    /// Current filter text.
    pub query: String,
    /// Result of filtering `all_entries` by `query`.
    pub visible_entries: Vec<Entry>,
}

impl Session {
    /// Creates a session browsing `origin_directory` with an empty query.
    pub fn new(
        origin_directory: PathBuf,
        all_entries: Vec<Entry>,
        previous_context: ContextHandle,
    ) -> Self {
        Self {
            all_entries,
            origin_directory,
            previous_context,
            query: String::new(),
            visible_entries: Vec::new(),
        }
    }

    /// Replaces the listing after a successful directory change.
    ///
    /// The query is cleared; `visible_entries` is left for the next sync.
    pub fn enter_directory(&mut self, origin_directory: PathBuf, all_entries: Vec<Entry>) {
        self.origin_directory = origin_directory;
        self.all_entries = all_entries;
        self.query.clear();
    }

    /// Returns the directory currently being browsed.
    pub fn origin_directory(&self) -> &Path {
        &self.origin_directory
    }

    /// Returns the display strings of the visible entries.
    pub fn visible_labels(&self) -> Vec<String> {
        self.visible_entries.iter().map(Entry::display_label).collect()
    }
}
