use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::PickerEvent;
use crate::runtime::host::TuiHost;
use crate::runtime::key_handler;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Dedicated thread forwarding crossterm events into the async loop.
///
/// The reader must be stopped before a child process takes over the
/// terminal, otherwise it would consume the child's keystrokes.
pub(crate) struct EventReader {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl EventReader {
    pub(crate) fn spawn(event_tx: mpsc::UnboundedSender<Event>) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let thread_shutdown = Arc::clone(&shutdown);
        let handle = std::thread::spawn(move || {
            while !thread_shutdown.load(Ordering::Relaxed) {
                match crossterm::event::poll(POLL_INTERVAL) {
                    Ok(true) => {
                        if let Ok(event) = crossterm::event::read()
                            && event_tx.send(event).is_err()
                        {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signals the thread and waits for it to finish its current poll.
    pub(crate) fn stop(mut self) {
        self.join();
    }

    fn join(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            debug!("event reader thread panicked");
        }
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.join();
    }
}

/// Maps a terminal event to a core event, updating host-local state such
/// as the query editor and the status line.
pub(crate) fn translate_event(host: &mut TuiHost, event: &Event) -> Option<PickerEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            host.clear_status();

            key_handler::handle_key(&mut host.input, *key)
        }
        Event::Paste(text) => {
            host.clear_status();

            key_handler::handle_paste(&mut host.input, text)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::app::PickerHost;
    use crate::domain::ErrorKind;

    #[test]
    fn test_translate_event_clears_status_on_key_press() {
        // Arrange
        let mut host = TuiHost::new();
        host.report_error(ErrorKind::NoEntriesFound, "no entries found in `/x`");
        let event = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        // Act
        let picker_event = translate_event(&mut host, &event);

        // Assert
        assert_eq!(picker_event, Some(PickerEvent::QueryChanged("a".to_string())));
        assert_eq!(host.status, None);
    }

    #[test]
    fn test_translate_event_ignores_key_release_and_resize() {
        // Arrange
        let mut host = TuiHost::new();
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        // Act
        let released = translate_event(&mut host, &Event::Key(release));
        let resized = translate_event(&mut host, &Event::Resize(80, 24));

        // Assert
        assert_eq!(released, None);
        assert_eq!(resized, None);
    }

    #[test]
    fn test_translate_event_handles_paste() {
        // Arrange
        let mut host = TuiHost::new();

        // Act
        let picker_event = translate_event(&mut host, &Event::Paste("src".to_string()));

        // Assert
        assert_eq!(
            picker_event,
            Some(PickerEvent::QueryChanged("src".to_string()))
        );
        assert_eq!(host.input.text(), "src");
    }
}
