use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::view::ListView;
use crate::domain::{Entry, PickerError, Session};
use crate::infra::FileEnumerator;

/// Result of a navigation request that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The session now browses this directory.
    Entered(PathBuf),
    /// Nothing to do: no directory to enter, or already there (going up
    /// from the filesystem root).
    Unchanged,
}

/// Moves a session between directories.
///
/// A directory change resolves and lists the target before touching the
/// session, so a failed listing leaves the session where it was.
pub struct NavigationController {
    enumerator: Box<dyn FileEnumerator>,
}

impl NavigationController {
    pub fn new(enumerator: Box<dyn FileEnumerator>) -> Self {
        Self { enumerator }
    }

    /// Lists `directory` for a new session.
    ///
    /// # Errors
    /// Returns [`PickerError::DirectoryUnreadable`] when the directory cannot
    /// be resolved or listed.
    pub fn enumerate(&self, directory: &Path) -> Result<(PathBuf, Vec<Entry>), PickerError> {
        let resolved = self.enumerator.resolve(directory)?;
        let entries = self.enumerator.list(&resolved)?;

        Ok((resolved, entries))
    }

    /// Enters directory `target` relative to the session's directory.
    ///
    /// The query is cleared and the visible list is rebuilt with the
    /// selection at the top.
    ///
    /// # Errors
    /// Returns [`PickerError::NotADirectory`] for a file target and
    /// [`PickerError::DirectoryUnreadable`] when the target cannot be
    /// resolved or listed.
    pub fn descend(
        &self,
        session: &mut Session,
        view: &mut ListView,
        target: &Entry,
    ) -> Result<NavigationOutcome, PickerError> {
        if !target.is_dir {
            return Err(PickerError::NotADirectory {
                name: target.name.to_string_lossy().into_owned(),
            });
        }

        let resolved = self
            .enumerator
            .resolve(&session.origin_directory.join(&target.name))?;
        // Only "go up" at the filesystem root lands back in place.
        if target.is_go_up() && resolved == session.origin_directory {
            return Ok(NavigationOutcome::Unchanged);
        }
        let entries = self.enumerator.list(&resolved)?;

        info!(
            from = %session.origin_directory.display(),
            to = %resolved.display(),
            "changing directory"
        );
        session.enter_directory(resolved.clone(), entries);
        view.reload(session);

        Ok(NavigationOutcome::Entered(resolved))
    }

    /// Goes up to the parent directory.
    ///
    /// # Errors
    /// Same as [`Self::descend`].
    pub fn ascend(
        &self,
        session: &mut Session,
        view: &mut ListView,
    ) -> Result<NavigationOutcome, PickerError> {
        self.descend(session, view, &Entry::go_up())
    }

    /// Enters the first visible directory, "go up" included.
    ///
    /// # Errors
    /// Same as [`Self::descend`].
    pub fn find_next_directory_entry(
        &self,
        session: &mut Session,
        view: &mut ListView,
    ) -> Result<NavigationOutcome, PickerError> {
        let Some(target) = session
            .visible_entries
            .iter()
            .find(|entry| entry.is_dir)
            .cloned()
        else {
            return Ok(NavigationOutcome::Unchanged);
        };

        self.descend(session, view, &target)
    }
}
