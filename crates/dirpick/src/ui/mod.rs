pub mod components;
pub mod util;

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::domain::InputState;
use crate::runtime::StatusMessage;

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Borrowed view model for one frame.
pub struct RenderContext<'a> {
    pub input: &'a InputState,
    pub labels: &'a [String],
    pub selected_index: usize,
    pub status: Option<&'a StatusMessage>,
    pub title: &'a Path,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        input,
        labels,
        selected_index,
        status,
        title,
    } = context;

    let area = f.area();

    let chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(3), // Query
            Constraint::Min(0),    // Entries
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    components::status_bar::StatusBar::new(title).render(f, chunks[0]);
    components::entry_list::EntryList::new(labels, selected_index).render(f, chunks[2]);
    components::footer_bar::FooterBar::new(status).render(f, chunks[3]);
    // Last, so the terminal cursor ends up in the query.
    components::query_bar::QueryBar::new(input).render(f, chunks[1]);
}
