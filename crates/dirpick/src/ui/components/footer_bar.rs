use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::runtime::StatusMessage;
use crate::ui::Component;

const KEY_HINTS: &str = " enter open · tab next dir · bksp up · ↑/↓ move · esc cancel";

/// Bottom bar: the last reported error, or key hints when there is none.
pub struct FooterBar<'a> {
    status: Option<&'a StatusMessage>,
}

impl<'a> FooterBar<'a> {
    pub fn new(status: Option<&'a StatusMessage>) -> Self {
        Self { status }
    }
}

impl Component for FooterBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let line = match self.status {
            Some(status) => Line::from(vec![
                Span::styled(
                    format!(" {}: ", status.kind),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(status.message.as_str(), Style::default().fg(Color::White)),
            ]),
            None => Line::from(Span::styled(
                KEY_HINTS,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::DIM),
            )),
        };

        let footer = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        f.render_widget(footer, area);
    }
}
