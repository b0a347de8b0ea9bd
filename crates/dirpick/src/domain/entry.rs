/// Name of the synthetic parent-navigation entry, as rendered.
pub const GO_UP_NAME: &str = "../";

/// Path-separator marker appended to directory display strings.
pub const DIRECTORY_MARKER: char = '/';

use std::ffi::OsString;

/// A single file or directory listed in the picker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Raw entry name relative to its parent directory, without any
    /// marker. Kept as an `OsString` so path joins see the exact bytes.
    pub name: OsString,
}

impl Entry {
    /// Creates a directory entry.
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            is_dir: true,
            name: name.into(),
        }
    }

    /// Creates a file entry.
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            is_dir: false,
            name: name.into(),
        }
    }

    /// Creates the synthetic "go up" entry that heads every listing.
    pub fn go_up() -> Self {
        Self::dir("..")
    }

    /// Returns whether this is the synthetic "go up" entry.
    pub fn is_go_up(&self) -> bool {
        self.is_dir && self.name == ".."
    }

    /// Returns the display string, with a trailing separator for
    /// directories. Names that are not valid UTF-8 are shown lossily.
    pub fn display_label(&self) -> String {
        let name = self.name.to_string_lossy();
        if self.is_dir {
            return format!("{name}{DIRECTORY_MARKER}");
        }

        name.into_owned()
    }
}
