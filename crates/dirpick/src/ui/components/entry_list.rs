use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::domain::DIRECTORY_MARKER;
use crate::ui::Component;

/// Visible entries with the selected row highlighted.
pub struct EntryList<'a> {
    labels: &'a [String],
    selected_index: usize,
}

impl<'a> EntryList<'a> {
    pub fn new(labels: &'a [String], selected_index: usize) -> Self {
        Self {
            labels,
            selected_index,
        }
    }

    fn title(&self) -> String {
        match self.labels.len() {
            1 => " 1 entry ".to_string(),
            count => format!(" {count} entries "),
        }
    }
}

impl Component for EntryList<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem<'_>> = if self.labels.is_empty() {
            vec![ListItem::new(Span::styled(
                "No matches",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.labels
                .iter()
                .map(|label| {
                    let color = if label.ends_with(DIRECTORY_MARKER) {
                        Color::Yellow
                    } else {
                        Color::Cyan
                    };

                    ListItem::new(Span::styled(label.as_str(), Style::default().fg(color)))
                })
                .collect()
        };

        let mut list_state = ListState::default();
        if !self.labels.is_empty() {
            list_state.select(Some(
                self.selected_index
                    .min(self.labels.len().saturating_sub(1)),
            ));
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(Span::styled(
                self.title(),
                Style::default().fg(Color::Cyan),
            )))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut list_state);
    }
}
