use tracing::debug;

use crate::app::selection::SelectionController;
use crate::domain::{Entry, Session};

/// What one sync changed, so the caller can limit host updates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The visible entries differ from the ones previously shown.
    pub list_changed: bool,
    /// The selected index moved, either by reset or by clamping.
    pub selection_changed: bool,
    /// The reset-to-top policy fired.
    pub selection_reset: bool,
}

/// Reconciles the displayed list with a freshly filtered one.
///
/// Selection resets to the top when the visible count or the query text
/// changed since the previous sync; otherwise it is kept (and clamped).
#[derive(Clone, Debug, Default)]
pub struct ListSyncEngine {
    last_query: Option<String>,
}

impl ListSyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the query that produced the current visible entries.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Forgets the last query so the next sync counts as a query change.
    pub fn invalidate(&mut self) {
        self.last_query = None;
    }

    /// Installs `filtered` as the session's visible entries and applies the
    /// selection policy.
    pub fn sync(
        &mut self,
        session: &mut Session,
        filtered: Vec<Entry>,
        selection: &mut SelectionController,
    ) -> SyncOutcome {
        let previous_len = session.visible_entries.len();
        let count_changed = previous_len != filtered.len();
        let query_changed = self.last_query.as_deref() != Some(session.query.as_str());
        let list_changed = session.visible_entries != filtered;

        session.visible_entries = filtered;
        let visible_len = session.visible_entries.len();

        let selection_reset = count_changed || query_changed;
        let selection_changed = if selection_reset {
            selection.reset_to_top()
        } else {
            selection.clamp(visible_len)
        };

        debug!(
            query = %session.query,
            previous_len,
            visible_len,
            selection_reset,
            selected_index = selection.selected_index(),
            "synced visible entries"
        );
        self.last_query = Some(session.query.clone());

        SyncOutcome {
            list_changed,
            selection_changed,
            selection_reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::ContextHandle;

    fn session_with_query(query: &str) -> Session {
        let mut session = Session::new(PathBuf::from("/work"), Vec::new(), ContextHandle(0));
        session.query = query.to_string();

        session
    }

    fn files(names: &[&str]) -> Vec<Entry> {
        names.iter().map(|name| Entry::file(*name)).collect()
    }

    #[test]
    fn test_sync_twice_with_same_query_and_count_keeps_selection() {
        // Arrange
        let mut engine = ListSyncEngine::new();
        let mut selection = SelectionController::new();
        let mut session = session_with_query("rs");
        engine.sync(&mut session, files(&["a.rs", "b.rs", "c.rs"]), &mut selection);
        selection.move_to(2, 3);

        // Act
        let outcome = engine.sync(&mut session, files(&["a.rs", "b.rs", "c.rs"]), &mut selection);

        // Assert
        assert_eq!(selection.selected_index(), 2);
        assert!(!outcome.selection_reset);
        assert!(!outcome.list_changed);
    }

    #[test]
    fn test_sync_resets_when_count_changes() {
        // Arrange
        let mut engine = ListSyncEngine::new();
        let mut selection = SelectionController::new();
        let mut session = session_with_query("r");
        engine.sync(&mut session, files(&["a.rs", "b.rs", "c.rs"]), &mut selection);
        selection.move_to(1, 3);

        // Act
        let outcome = engine.sync(&mut session, files(&["a.rs", "b.rs"]), &mut selection);

        // Assert
        assert_eq!(selection.selected_index(), 0);
        assert!(outcome.selection_reset);
        assert!(outcome.selection_changed);
        assert!(outcome.list_changed);
    }

    #[test]
    fn test_sync_resets_when_query_changes_with_same_count() {
        // Arrange
        let mut engine = ListSyncEngine::new();
        let mut selection = SelectionController::new();
        let mut session = session_with_query("a");
        engine.sync(&mut session, files(&["a.rs", "b.rs"]), &mut selection);
        selection.move_to(1, 2);
        session.query = "ab".to_string();

        // Act
        let outcome = engine.sync(&mut session, files(&["a.rs", "b.rs"]), &mut selection);

        // Assert
        assert_eq!(selection.selected_index(), 0);
        assert!(outcome.selection_reset);
        assert!(!outcome.list_changed);
        assert_eq!(engine.last_query(), Some("ab"));
    }

    #[test]
    fn test_sync_reorder_with_same_query_and_count_keeps_index() {
        // Arrange
        let mut engine = ListSyncEngine::new();
        let mut selection = SelectionController::new();
        let mut session = session_with_query("s");
        engine.sync(&mut session, files(&["a.rs", "b.rs"]), &mut selection);
        selection.move_to(1, 2);

        // Act
        let outcome = engine.sync(&mut session, files(&["b.rs", "a.rs"]), &mut selection);

        // Assert
        assert_eq!(selection.selected_index(), 1);
        assert!(outcome.list_changed);
        assert!(!outcome.selection_reset);
    }

    #[test]
    fn test_sync_after_invalidate_counts_as_query_change() {
        // Arrange
        let mut engine = ListSyncEngine::new();
        let mut selection = SelectionController::new();
        let mut session = session_with_query("");
        engine.sync(&mut session, files(&["a", "b"]), &mut selection);
        selection.move_to(1, 2);
        engine.invalidate();

        // Act
        let outcome = engine.sync(&mut session, files(&["c", "d"]), &mut selection);

        // Assert
        assert!(outcome.selection_reset);
        assert_eq!(selection.selected_index(), 0);
        assert_eq!(engine.last_query(), Some(""));
    }

    #[test]
    fn test_sync_to_empty_list_selects_zero() {
        // Arrange
        let mut engine = ListSyncEngine::new();
        let mut selection = SelectionController::new();
        let mut session = session_with_query("");
        engine.sync(&mut session, files(&["a", "b", "c"]), &mut selection);
        selection.move_to(2, 3);
        session.query = "xyz".to_string();

        // Act
        engine.sync(&mut session, Vec::new(), &mut selection);

        // Assert
        assert!(session.visible_entries.is_empty());
        assert_eq!(selection.selected_index(), 0);
    }
}
