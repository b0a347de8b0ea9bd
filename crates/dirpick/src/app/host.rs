use std::path::Path;

use crate::domain::{ContextHandle, ErrorKind};

/// Output side of the picker: everything the core asks its host to show
/// or do.
///
/// The list's first display line is reserved for the query, so
/// `render_query` and `render_list` are separate calls.
#[cfg_attr(test, mockall::automock)]
pub trait PickerHost {
    /// Replaces the whole list; directory labels end with `/`.
    fn render_list(&mut self, labels: &[String], selected_index: usize);

    /// Moves the single-item highlight without touching the list.
    fn render_selection(&mut self, selected_index: usize);

    /// Shows the directory being browsed.
    fn render_title(&mut self, directory: &Path);

    /// Replaces the live query text, e.g. after a directory change cleared
    /// it.
    fn render_query(&mut self, query: &str);

    fn open_file(&mut self, path: &Path);

    fn restore_previous_context(&mut self, handle: ContextHandle);

    fn report_error(&mut self, kind: ErrorKind, message: &str);
}
