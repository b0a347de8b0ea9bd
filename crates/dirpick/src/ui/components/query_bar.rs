use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::domain::InputState;
use crate::ui::Component;

const QUERY_PREFIX: &str = " › ";

/// Bordered single-line query editor with the terminal cursor placed at the
/// input cursor.
pub struct QueryBar<'a> {
    input: &'a InputState,
}

impl<'a> QueryBar<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self { input }
    }

    /// Display width of the query text left of the cursor.
    fn cursor_offset(&self) -> u16 {
        let before_cursor: String = self.input.text().chars().take(self.input.cursor).collect();

        u16::try_from(before_cursor.width()).unwrap_or(u16::MAX)
    }
}

impl Component for QueryBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                QUERY_PREFIX,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.input.text()),
        ]);
        let query = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(" Filter ", Style::default().fg(Color::Cyan))),
        );
        f.render_widget(query, area);

        let prefix_width = u16::try_from(QUERY_PREFIX.width()).unwrap_or(0);
        let max_x = area.right().saturating_sub(2);
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(prefix_width)
            .saturating_add(self.cursor_offset())
            .min(max_x);
        f.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}
