use std::path::{Path, PathBuf};

use tracing::debug;

/// Process-wide picker state shared by consecutive sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerService {
    last_remembered_directory: Option<PathBuf>,
    working_directory: PathBuf,
}

impl PickerService {
    /// Creates a service whose first session starts in `working_directory`.
    pub fn new(working_directory: PathBuf) -> Self {
        Self {
            last_remembered_directory: None,
            working_directory,
        }
    }

    /// Creates a service rooted at the process working directory, or `/`
    /// when it cannot be determined.
    pub fn from_current_dir() -> Self {
        let working_directory = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));

        Self::new(working_directory)
    }

    /// Returns where a session without an explicit directory starts.
    pub fn default_start_directory(&self) -> &Path {
        self.last_remembered_directory
            .as_deref()
            .unwrap_or(&self.working_directory)
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn last_remembered_directory(&self) -> Option<&Path> {
        self.last_remembered_directory.as_deref()
    }

    /// Records `directory` as the next session's default start.
    pub fn remember(&mut self, directory: PathBuf) {
        debug!(directory = %directory.display(), "remembering directory");
        self.last_remembered_directory = Some(directory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_directory_falls_back_to_working_directory() {
        // Arrange
        let service = PickerService::new(PathBuf::from("/home/user"));

        // Act
        let start = service.default_start_directory();

        // Assert
        assert_eq!(start, Path::new("/home/user"));
        assert_eq!(service.working_directory(), Path::new("/home/user"));
        assert_eq!(service.last_remembered_directory(), None);
    }

    #[test]
    fn test_remember_overrides_default_start_directory() {
        // Arrange
        let mut service = PickerService::new(PathBuf::from("/home/user"));

        // Act
        service.remember(PathBuf::from("/srv/data"));

        // Assert
        assert_eq!(service.default_start_directory(), Path::new("/srv/data"));
        assert_eq!(
            service.last_remembered_directory(),
            Some(Path::new("/srv/data"))
        );
    }
}
