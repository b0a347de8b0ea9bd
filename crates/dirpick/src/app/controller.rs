//! Session state machine tying enumeration, filtering, selection, and
//! navigation together.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::app::host::PickerHost;
use crate::app::navigation::{NavigationController, NavigationOutcome};
use crate::app::service::PickerService;
use crate::app::sync::SyncOutcome;
use crate::app::view::ListView;
use crate::domain::{ContextHandle, ErrorKind, PickerError, PickerEvent, Session};
use crate::infra::{FileEnumerator, FuzzyMatcher};

/// Whether a session is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    Browsing,
}

/// Result of handling one event.
///
/// `Committed` and `Cancelled` end the session; the controller is `Idle`
/// again when they are returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Browsing,
    Committed(PathBuf),
    Cancelled,
}

/// Owns at most one picker session and drives it from host events.
pub struct SessionController<'svc, H: PickerHost> {
    host: H,
    navigation: NavigationController,
    service: &'svc mut PickerService,
    session: Option<Session>,
    view: ListView,
}

impl<'svc, H: PickerHost> SessionController<'svc, H> {
    pub fn new(
        service: &'svc mut PickerService,
        host: H,
        enumerator: Box<dyn FileEnumerator>,
        matcher: Box<dyn FuzzyMatcher>,
    ) -> Self {
        Self {
            host,
            navigation: NavigationController::new(enumerator),
            service,
            session: None,
            view: ListView::new(matcher),
        }
    }

    pub fn state(&self) -> PickerState {
        if self.session.is_some() {
            return PickerState::Browsing;
        }

        PickerState::Idle
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.view.selection().selected_index()
    }

    pub fn service(&self) -> &PickerService {
        self.service
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Starts a session in `start_directory`, or in the service's default
    /// start directory when `None`.
    ///
    /// An explicit start directory is remembered for later sessions. An
    /// active session is closed first and its context handed back to the
    /// host. On failure the controller stays `Idle` and the error is
    /// reported to the host.
    ///
    /// # Errors
    /// Returns [`PickerError::DirectoryUnreadable`] when the directory cannot
    /// be listed and [`PickerError::NoEntriesFound`] when the listing is
    /// empty.
    pub fn open(
        &mut self,
        start_directory: Option<PathBuf>,
        previous_context: ContextHandle,
    ) -> Result<(), PickerError> {
        if let Some(session) = self.session.take() {
            warn!(
                directory = %session.origin_directory.display(),
                "replacing active session"
            );
            self.view.clear();
            self.host.restore_previous_context(session.previous_context);
        }

        let is_explicit = start_directory.is_some();
        let directory =
            start_directory.unwrap_or_else(|| self.service.default_start_directory().to_path_buf());

        let (origin_directory, entries) = match self.navigation.enumerate(&directory) {
            Ok(listing) => listing,
            Err(error) => {
                self.report(&error);

                return Err(error);
            }
        };
        if entries.is_empty() {
            let error = PickerError::NoEntriesFound {
                path: origin_directory,
            };
            self.report(&error);

            return Err(error);
        }

        if is_explicit {
            self.service.remember(origin_directory.clone());
        }

        let mut session = Session::new(origin_directory, entries, previous_context);
        self.view.reload(&mut session);
        self.render_session(&session);
        info!(
            directory = %session.origin_directory.display(),
            entries = session.all_entries.len(),
            "picker session opened"
        );
        self.session = Some(session);

        Ok(())
    }

    /// Applies one host event to the active session.
    ///
    /// Errors are reported to the host and leave the session as it was.
    ///
    /// # Errors
    /// Returns [`PickerError::NotBrowsing`] when no session is active, and
    /// navigation errors from commit, ascend, or next-directory events.
    pub fn handle(&mut self, event: PickerEvent) -> Result<Transition, PickerError> {
        let Some(mut session) = self.session.take() else {
            let error = PickerError::NotBrowsing;
            self.report(&error);

            return Err(error);
        };

        let result = self.apply(&mut session, event);
        match &result {
            Ok(Transition::Browsing) | Err(_) => self.session = Some(session),
            Ok(Transition::Committed(_) | Transition::Cancelled) => self.view.clear(),
        }
        if let Err(error) = &result {
            self.report(error);
        }

        result
    }

    fn apply(
        &mut self,
        session: &mut Session,
        event: PickerEvent,
    ) -> Result<Transition, PickerError> {
        match event {
            PickerEvent::QueryChanged(query) => {
                session.query = query;
                let outcome = self.view.refresh(session);
                self.render_sync(session, outcome);

                Ok(Transition::Browsing)
            }
            PickerEvent::SelectionMoved(selection_move) => {
                let visible_len = session.visible_entries.len();
                let selection = self.view.selection_mut();
                if selection.apply(selection_move, visible_len) {
                    let selected_index = selection.selected_index();
                    self.host.render_selection(selected_index);
                }

                Ok(Transition::Browsing)
            }
            PickerEvent::Commit => self.commit(session),
            PickerEvent::Cancel => {
                info!(
                    directory = %session.origin_directory.display(),
                    "picker session cancelled"
                );
                self.host.restore_previous_context(session.previous_context);

                Ok(Transition::Cancelled)
            }
            PickerEvent::NextDirectory => {
                let outcome = self
                    .navigation
                    .find_next_directory_entry(session, &mut self.view)?;

                Ok(self.after_navigation(session, &outcome))
            }
            PickerEvent::Ascend => {
                let outcome = self.navigation.ascend(session, &mut self.view)?;

                Ok(self.after_navigation(session, &outcome))
            }
        }
    }

    /// Descends into the selected directory or opens the selected file.
    fn commit(&mut self, session: &mut Session) -> Result<Transition, PickerError> {
        let entry = self.view.selected_entry(session)?.clone();

        if entry.is_dir {
            let outcome = self.navigation.descend(session, &mut self.view, &entry)?;

            return Ok(self.after_navigation(session, &outcome));
        }

        let path = session.origin_directory.join(&entry.name);
        self.service.remember(session.origin_directory.clone());
        info!(path = %path.display(), "picker session committed");
        self.host.open_file(&path);

        Ok(Transition::Committed(path))
    }

    fn after_navigation(&mut self, session: &Session, outcome: &NavigationOutcome) -> Transition {
        if let NavigationOutcome::Entered(_) = outcome {
            self.render_session(session);
        }

        Transition::Browsing
    }

    fn render_session(&mut self, session: &Session) {
        let selected_index = self.selected_index();
        self.host.render_title(&session.origin_directory);
        self.host.render_query(&session.query);
        self.host
            .render_list(&session.visible_labels(), selected_index);
    }

    /// Redraws the list only when it changed; otherwise at most the
    /// highlight.
    fn render_sync(&mut self, session: &Session, outcome: SyncOutcome) {
        let selected_index = self.selected_index();
        if outcome.list_changed {
            self.host
                .render_list(&session.visible_labels(), selected_index);
        } else if outcome.selection_changed {
            self.host.render_selection(selected_index);
        }
    }

    fn report(&mut self, error: &PickerError) {
        let kind = error.kind();
        if kind == ErrorKind::InvalidNavigationTarget {
            error!(%error, "selection invariant violated");
        } else {
            warn!(%error, "picker transition failed");
        }

        self.host.report_error(kind, &error.to_string());
    }
}
