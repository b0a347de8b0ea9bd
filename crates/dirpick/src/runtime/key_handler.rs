use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{InputState, PickerEvent, SelectionMove};

/// Rows moved by `PageUp` and `PageDown`.
pub const PAGE_SIZE: isize = 10;

/// Translates one key press into a core event, editing `input` in place.
///
/// Returns `None` for keys that only move the query cursor or that the
/// picker ignores.
pub fn handle_key(input: &mut InputState, key: KeyEvent) -> Option<PickerEvent> {
    let is_control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(PickerEvent::Cancel),
        KeyCode::Char('c') if is_control => Some(PickerEvent::Cancel),
        KeyCode::Enter => Some(PickerEvent::Commit),
        KeyCode::Tab => Some(PickerEvent::NextDirectory),
        KeyCode::Up => Some(move_by(-1)),
        KeyCode::Char('p') if is_control => Some(move_by(-1)),
        KeyCode::Down => Some(move_by(1)),
        KeyCode::Char('n') if is_control => Some(move_by(1)),
        KeyCode::PageUp => Some(move_by(-PAGE_SIZE)),
        KeyCode::PageDown => Some(move_by(PAGE_SIZE)),
        KeyCode::Home if is_control => Some(PickerEvent::SelectionMoved(SelectionMove::To(0))),
        KeyCode::End if is_control => {
            Some(PickerEvent::SelectionMoved(SelectionMove::To(isize::MAX)))
        }
        KeyCode::Left => {
            input.move_left();

            None
        }
        KeyCode::Right => {
            input.move_right();

            None
        }
        KeyCode::Home => {
            input.move_home();

            None
        }
        KeyCode::Char('a') if is_control => {
            input.move_home();

            None
        }
        KeyCode::End => {
            input.move_end();

            None
        }
        KeyCode::Char('e') if is_control => {
            input.move_end();

            None
        }
        KeyCode::Char('u') if is_control => {
            if input.is_empty() {
                return None;
            }
            input.clear();

            Some(query_changed(input))
        }
        KeyCode::Backspace if input.is_empty() => Some(PickerEvent::Ascend),
        KeyCode::Backspace => input.delete_backward().then(|| query_changed(input)),
        KeyCode::Delete => {
            let before = input.text().len();
            input.delete_forward();

            (input.text().len() != before).then(|| query_changed(input))
        }
        KeyCode::Char(character) if !is_control => {
            input.insert_char(character);

            Some(query_changed(input))
        }
        _ => None,
    }
}

/// Inserts bracketed-paste text into the query.
pub fn handle_paste(input: &mut InputState, text: &str) -> Option<PickerEvent> {
    let before = input.text().len();
    input.insert_text(text);

    (input.text().len() != before).then(|| query_changed(input))
}

fn move_by(delta: isize) -> PickerEvent {
    PickerEvent::SelectionMoved(SelectionMove::By(delta))
}

fn query_changed(input: &InputState) -> PickerEvent {
    PickerEvent::QueryChanged(input.text().to_string())
}
