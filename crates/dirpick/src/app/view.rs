use crate::app::filter::FuzzyFilterAdapter;
use crate::app::selection::SelectionController;
use crate::app::sync::{ListSyncEngine, SyncOutcome};
use crate::domain::{Entry, PickerError, Session};
use crate::infra::FuzzyMatcher;

/// Filter, sync, and selection state behind the visible list.
pub struct ListView {
    filter: FuzzyFilterAdapter,
    selection: SelectionController,
    sync: ListSyncEngine,
}

impl ListView {
    pub fn new(matcher: Box<dyn FuzzyMatcher>) -> Self {
        Self {
            filter: FuzzyFilterAdapter::new(matcher),
            selection: SelectionController::new(),
            sync: ListSyncEngine::new(),
        }
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionController {
        &mut self.selection
    }

    /// Returns the query that produced the current visible entries.
    pub fn last_query(&self) -> Option<&str> {
        self.sync.last_query()
    }

    /// Re-filters `session.all_entries` by `session.query`.
    pub fn refresh(&mut self, session: &mut Session) -> SyncOutcome {
        let filtered = self.filter.filter(&session.all_entries, &session.query);

        self.sync.sync(session, filtered, &mut self.selection)
    }

    /// Re-filters after the listing was replaced; selection always resets.
    pub fn reload(&mut self, session: &mut Session) -> SyncOutcome {
        self.sync.invalidate();

        self.refresh(session)
    }

    /// Drops per-session state before the next session starts.
    pub fn clear(&mut self) {
        self.sync.invalidate();
        self.selection.reset_to_top();
    }

    /// Returns the highlighted entry.
    ///
    /// # Errors
    /// Returns [`PickerError::InvalidNavigationTarget`] when the selection
    /// does not point at a visible entry.
    pub fn selected_entry<'a>(&self, session: &'a Session) -> Result<&'a Entry, PickerError> {
        let index = self.selection.selected_index();

        session
            .visible_entries
            .get(index)
            .ok_or(PickerError::InvalidNavigationTarget {
                index,
                len: session.visible_entries.len(),
            })
    }
}
