use std::path::Path;

/// Displays `path` relative to the home directory as `~/...` when possible.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(relative) = path.strip_prefix(&home)
    {
        if relative.as_os_str().is_empty() {
            return "~".to_string();
        }

        return format!("~/{}", relative.display());
    }

    path.display().to_string()
}
