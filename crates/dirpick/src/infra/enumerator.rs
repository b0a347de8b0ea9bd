//! Directory listing boundary used by navigation.

use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::domain::{Entry, PickerError};

/// Lists one directory level and resolves navigation targets.
///
/// Production uses [`FsFileEnumerator`], while tests can inject
/// `MockFileEnumerator` to simulate unreadable or vanished directories.
#[cfg_attr(test, mockall::automock)]
pub trait FileEnumerator {
    /// Returns the immediate children of `directory`, headed by the
    /// "go up" entry.
    ///
    /// # Errors
    /// Returns [`PickerError::DirectoryUnreadable`] when the directory does
    /// not exist, is not a directory, or cannot be read.
    fn list(&self, directory: &Path) -> Result<Vec<Entry>, PickerError>;

    /// Resolves `path` to an absolute path with symlinks, `.` and `..`
    /// removed.
    ///
    /// # Errors
    /// Returns [`PickerError::DirectoryUnreadable`] when `path` cannot be
    /// resolved.
    fn resolve(&self, path: &Path) -> Result<PathBuf, PickerError>;
}

/// Filesystem-backed enumerator.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsFileEnumerator {
    /// Applies `.gitignore` and `.ignore` rules to listed children.
    pub respect_ignore: bool,
    /// Lists dot-prefixed children.
    pub show_hidden: bool,
}

impl FsFileEnumerator {
    pub fn new(show_hidden: bool, respect_ignore: bool) -> Self {
        Self {
            respect_ignore,
            show_hidden,
        }
    }

    /// Collects child names through `ignore`, which applies ignore files.
    fn ignore_aware_children(&self, directory: &Path) -> Vec<Entry> {
        WalkBuilder::new(directory)
            .max_depth(Some(1))
            .hidden(!self.show_hidden)
            .require_git(false)
            .follow_links(false)
            .build()
            .filter_map(|walk_entry| match walk_entry {
                Ok(walk_entry) => Some(walk_entry),
                Err(error) => {
                    debug!(%error, "skipping unreadable directory child");

                    None
                }
            })
            .filter(|walk_entry| walk_entry.depth() == 1)
            .map(|walk_entry| {
                child_entry(walk_entry.file_name().to_os_string(), walk_entry.path())
            })
            .collect()
    }

    /// Collects child names straight from `read_dir`.
    fn plain_children(&self, read_dir: fs::ReadDir) -> Vec<Entry> {
        read_dir
            .filter_map(|dir_entry| match dir_entry {
                Ok(dir_entry) => Some(dir_entry),
                Err(error) => {
                    debug!(%error, "skipping unreadable directory child");

                    None
                }
            })
            .filter_map(|dir_entry| {
                let name = dir_entry.file_name();
                if !self.show_hidden && name.as_encoded_bytes().starts_with(b".") {
                    return None;
                }

                Some(child_entry(name, &dir_entry.path()))
            })
            .collect()
    }
}

impl FileEnumerator for FsFileEnumerator {
    fn list(&self, directory: &Path) -> Result<Vec<Entry>, PickerError> {
        let read_dir =
            fs::read_dir(directory).map_err(|source| PickerError::unreadable(directory, source))?;

        let mut children = if self.respect_ignore {
            self.ignore_aware_children(directory)
        } else {
            self.plain_children(read_dir)
        };
        sort_entries(&mut children);

        let mut entries = Vec::with_capacity(children.len() + 1);
        entries.push(Entry::go_up());
        entries.extend(children);
        debug!(
            directory = %directory.display(),
            count = entries.len(),
            "listed directory"
        );

        Ok(entries)
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, PickerError> {
        fs::canonicalize(path).map_err(|source| PickerError::unreadable(path, source))
    }
}

/// Builds one entry, following symlinks to decide the directory tag.
fn child_entry(name: OsString, path: &Path) -> Entry {
    if path.is_dir() {
        return Entry::dir(name);
    }

    Entry::file(name)
}

/// Sorts directories before files; within each group by name.
fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|first, second| match second.is_dir.cmp(&first.is_dir) {
        Ordering::Equal => first.name.cmp(&second.name),
        ordering => ordering,
    });
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(Entry::display_label).collect()
    }

    #[test]
    fn test_list_prepends_go_up_and_tags_directories() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("a.txt"), "").expect("failed to write file");
        fs::create_dir(temp_dir.path().join("b")).expect("failed to create dir");
        let enumerator = FsFileEnumerator::new(true, false);

        // Act
        let entries = enumerator
            .list(temp_dir.path())
            .expect("failed to list directory");

        // Assert
        assert_eq!(names(&entries), vec!["../", "b/", "a.txt"]);
        assert!(entries[0].is_go_up());
        assert!(entries[1].is_dir);
        assert!(!entries[2].is_dir);
    }

    #[test]
    fn test_list_empty_directory_still_has_go_up() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let enumerator = FsFileEnumerator::default();

        // Act
        let entries = enumerator
            .list(temp_dir.path())
            .expect("failed to list directory");

        // Assert
        assert_eq!(entries, vec![Entry::go_up()]);
    }

    #[test]
    fn test_list_does_not_recurse() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("outer/inner")).expect("failed to create dirs");
        fs::write(temp_dir.path().join("outer/inner/deep.txt"), "").expect("failed to write");
        let enumerator = FsFileEnumerator::new(true, false);

        // Act
        let entries = enumerator
            .list(temp_dir.path())
            .expect("failed to list directory");

        // Assert
        assert_eq!(names(&entries), vec!["../", "outer/"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_keeps_non_utf8_names_joinable() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let raw = OsStr::from_bytes(b"bad\xff.txt");
        fs::write(temp_dir.path().join(raw), "").expect("failed to write file");

        // Act
        let plain = FsFileEnumerator::new(true, false)
            .list(temp_dir.path())
            .expect("failed to list directory");
        let ignore_aware = FsFileEnumerator::new(true, true)
            .list(temp_dir.path())
            .expect("failed to list directory");

        // Assert
        for entries in [plain, ignore_aware] {
            assert_eq!(entries[1].name.as_os_str(), raw);
            assert_eq!(entries[1].display_label(), "bad\u{fffd}.txt");
            assert!(temp_dir.path().join(&entries[1].name).exists());
        }
    }

    #[test]
    fn test_list_hides_dotfiles_when_disabled() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(".env"), "").expect("failed to write file");
        fs::write(temp_dir.path().join("visible.txt"), "").expect("failed to write file");
        let enumerator = FsFileEnumerator::new(false, false);

        // Act
        let entries = enumerator
            .list(temp_dir.path())
            .expect("failed to list directory");

        // Assert
        assert_eq!(names(&entries), vec!["../", "visible.txt"]);
    }

    #[test]
    fn test_list_respects_ignore_file_when_enabled() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(".ignore"), "target/\n*.log\n").expect("failed to write");
        fs::create_dir(temp_dir.path().join("target")).expect("failed to create dir");
        fs::create_dir(temp_dir.path().join("src")).expect("failed to create dir");
        fs::write(temp_dir.path().join("build.log"), "").expect("failed to write file");
        fs::write(temp_dir.path().join("Cargo.toml"), "").expect("failed to write file");
        let enumerator = FsFileEnumerator::new(false, true);

        // Act
        let entries = enumerator
            .list(temp_dir.path())
            .expect("failed to list directory");

        // Assert
        assert_eq!(names(&entries), vec!["../", "src/", "Cargo.toml"]);
    }

    #[test]
    fn test_list_missing_directory_is_unreadable() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone");
        let enumerator = FsFileEnumerator::default();

        // Act
        let result = enumerator.list(&missing);

        // Assert
        assert!(matches!(
            result,
            Err(PickerError::DirectoryUnreadable { ref path, .. }) if path == &missing
        ));
    }

    #[test]
    fn test_list_file_path_is_unreadable() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let file_path = temp_dir.path().join("plain.txt");
        fs::write(&file_path, "").expect("failed to write file");
        let enumerator = FsFileEnumerator::default();

        // Act
        let result = enumerator.list(&file_path);

        // Assert
        assert!(matches!(
            result,
            Err(PickerError::DirectoryUnreadable { .. })
        ));
    }

    #[test]
    fn test_resolve_normalizes_parent_components() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("sub")).expect("failed to create dir");
        let enumerator = FsFileEnumerator::default();
        let expected = fs::canonicalize(temp_dir.path()).expect("failed to canonicalize");

        // Act
        let resolved = enumerator
            .resolve(&temp_dir.path().join("sub").join(".."))
            .expect("failed to resolve path");

        // Assert
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_sort_entries_puts_directories_first() {
        // Arrange
        let mut entries = vec![
            Entry::file("b.rs"),
            Entry::dir("zeta"),
            Entry::file("a.rs"),
            Entry::dir("alpha"),
        ];

        // Act
        sort_entries(&mut entries);

        // Assert
        assert_eq!(names(&entries), vec!["alpha/", "zeta/", "a.rs", "b.rs"]);
    }
}
