use std::path::{Path, PathBuf};

use crate::app::PickerHost;
use crate::domain::{ContextHandle, ErrorKind, InputState};
use crate::ui::RenderContext;

/// Last error reported by the core, shown in the footer until the next key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: ErrorKind,
    pub message: String,
}

/// Terminal host: keeps the view model the core renders into.
#[derive(Debug, Default)]
pub struct TuiHost {
    /// Live query editor; the core replaces its text on directory changes.
    pub input: InputState,
    pub labels: Vec<String>,
    /// File the core asked to open, if any.
    pub opened_file: Option<PathBuf>,
    /// Context the core asked to restore, if any.
    pub restored_context: Option<ContextHandle>,
    pub selected_index: usize,
    pub status: Option<StatusMessage>,
    pub title: PathBuf,
}

impl TuiHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears one-shot signals before a new session starts.
    pub fn reset_signals(&mut self) {
        self.opened_file = None;
        self.restored_context = None;
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            input: &self.input,
            labels: &self.labels,
            selected_index: self.selected_index,
            status: self.status.as_ref(),
            title: &self.title,
        }
    }
}

impl PickerHost for TuiHost {
    fn render_list(&mut self, labels: &[String], selected_index: usize) {
        self.labels = labels.to_vec();
        self.selected_index = selected_index;
    }

    fn render_selection(&mut self, selected_index: usize) {
        self.selected_index = selected_index;
    }

    fn render_title(&mut self, directory: &Path) {
        self.title = directory.to_path_buf();
    }

    fn render_query(&mut self, query: &str) {
        if self.input.text() == query {
            return;
        }

        self.input.clear();
        self.input.insert_text(query);
    }

    fn open_file(&mut self, path: &Path) {
        self.opened_file = Some(path.to_path_buf());
    }

    fn restore_previous_context(&mut self, handle: ContextHandle) {
        self.restored_context = Some(handle);
    }

    fn report_error(&mut self, kind: ErrorKind, message: &str) {
        self.status = Some(StatusMessage {
            kind,
            message: message.to_string(),
        });
    }
}
