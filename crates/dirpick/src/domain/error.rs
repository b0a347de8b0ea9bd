use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error categories reported to the host through `report_error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    DirectoryUnreadable,
    NoEntriesFound,
    InvalidNavigationTarget,
    NotBrowsing,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DirectoryUnreadable => "directory unreadable",
            Self::NoEntriesFound => "no entries found",
            Self::InvalidNavigationTarget => "invalid navigation target",
            Self::NotBrowsing => "no active session",
        };

        f.write_str(label)
    }
}

/// Failures produced by picker transitions.
///
/// `DirectoryUnreadable` and `NoEntriesFound` abort only the attempted
/// transition and leave the session as it was. `InvalidNavigationTarget`
/// means the selection invariant was broken and is surfaced as a defect.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("cannot read directory `{}`: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no entries found in `{}`", path.display())]
    NoEntriesFound { path: PathBuf },
    #[error("selection index {index} is outside the {len} visible entries")]
    InvalidNavigationTarget { index: usize, len: usize },
    #[error("`{name}` is not a directory")]
    NotADirectory { name: String },
    #[error("no picker session is active")]
    NotBrowsing,
}

impl PickerError {
    /// Returns the host-facing category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectoryUnreadable { .. } => ErrorKind::DirectoryUnreadable,
            Self::NoEntriesFound { .. } => ErrorKind::NoEntriesFound,
            Self::InvalidNavigationTarget { .. } | Self::NotADirectory { .. } => {
                ErrorKind::InvalidNavigationTarget
            }
            Self::NotBrowsing => ErrorKind::NotBrowsing,
        }
    }

    /// Builds a `DirectoryUnreadable` error for `path`.
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }
}
