//! Terminal front end: owns the terminal, turns key presses into
//! [`PickerEvent`](crate::domain::PickerEvent)s, and renders the
//! [`TuiHost`] view model every frame.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app::{PickerService, SessionController, Transition};
use crate::config::PickerConfig;
use crate::domain::ContextHandle;
use crate::infra::{FsFileEnumerator, SkimFuzzyMatcher};
use crate::ui;

mod event;
mod host;
mod key_handler;
mod terminal;

pub use host::{StatusMessage, TuiHost};
pub use key_handler::{PAGE_SIZE, handle_key, handle_paste};

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

type TuiController<'svc> = SessionController<'svc, TuiHost>;

/// How the picker finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerExit {
    /// The user committed a file and no open command is configured.
    Selected(PathBuf),
    /// The user cancelled the session.
    Cancelled,
}

enum EventResult {
    Continue,
    Open(PathBuf),
    Quit(PickerExit),
}

/// Runs the picker until the user selects a file or cancels.
///
/// The first session is opened before the terminal is taken over, so an
/// unreadable start directory fails without touching the screen. With an
/// `open_command` configured, committed files are opened with it and a new
/// session starts in the last remembered directory, or the nearest
/// readable fallback when the command removed it.
///
/// # Errors
/// Returns an error if the start directory cannot be listed, or terminal
/// setup, rendering, or event processing fails.
pub async fn run(
    config: &PickerConfig,
    start_directory: Option<PathBuf>,
) -> io::Result<PickerExit> {
    let mut service = PickerService::from_current_dir();
    let enumerator = FsFileEnumerator::new(config.show_hidden, config.respect_ignore);
    let mut controller = SessionController::new(
        &mut service,
        TuiHost::new(),
        Box::new(enumerator),
        Box::new(SkimFuzzyMatcher::new()),
    );
    let open_command = config.open_command_parts();
    let mut context = ContextHandle::default();

    open_session(&mut controller, start_directory, context)?;

    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut reader = event::EventReader::spawn(event_tx.clone());

    let mut tick = tokio::time::interval(Duration::from_millis(50));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        render_frame(&controller, &mut terminal)?;

        match process_events(&mut controller, &mut event_rx, &mut tick, open_command.is_some())
            .await
        {
            EventResult::Continue => {}
            EventResult::Quit(exit) => {
                terminal.show_cursor()?;

                return Ok(exit);
            }
            EventResult::Open(path) => {
                let Some(command) = &open_command else {
                    return Ok(PickerExit::Selected(path));
                };

                reader.stop();
                terminal::suspend_terminal()?;
                run_open_command(command, &path);
                while event_rx.try_recv().is_ok() {}
                terminal::resume_terminal(&mut terminal)?;
                reader = event::EventReader::spawn(event_tx.clone());

                context = ContextHandle(context.0 + 1);
                controller.host_mut().reset_signals();
                reopen_session(&mut controller, context)?;
            }
        }
    }
}

fn open_session(
    controller: &mut TuiController<'_>,
    start_directory: Option<PathBuf>,
    context: ContextHandle,
) -> io::Result<()> {
    controller
        .open(start_directory, context)
        .map_err(io::Error::other)
}

/// Starts the next loop-mode session in the remembered directory.
///
/// When that directory is gone or unreadable, its ancestors and then the
/// working directory are tried. The first failure stays in the footer so
/// the user sees why the picker moved.
fn reopen_session(controller: &mut TuiController<'_>, context: ContextHandle) -> io::Result<()> {
    let Err(mut last_error) = controller.open(None, context) else {
        return Ok(());
    };
    let reported = controller.host().status.clone();

    let service = controller.service();
    let mut fallbacks: Vec<PathBuf> = service
        .default_start_directory()
        .ancestors()
        .skip(1)
        .map(Path::to_path_buf)
        .collect();
    fallbacks.push(service.working_directory().to_path_buf());

    for fallback in fallbacks {
        warn!(directory = %fallback.display(), "reopening picker in fallback directory");
        match controller.open(Some(fallback), context) {
            Ok(()) => {
                controller.host_mut().status = reported;

                return Ok(());
            }
            Err(error) => last_error = error,
        }
    }

    Err(io::Error::other(last_error))
}

async fn process_events(
    controller: &mut TuiController<'_>,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
    has_open_command: bool,
) -> EventResult {
    // Wait for either a terminal event or the next tick (for resize redraws).
    let maybe_event = tokio::select! {
        biased;
        event = event_rx.recv() => event,
        _ = tick.tick() => None,
    };
    let Some(event) = maybe_event else {
        return EventResult::Continue;
    };

    let mut result = process_event(controller, &event, has_open_command);

    // Drain queued events before re-rendering so fast typing does not lag
    // one frame per key.
    while matches!(result, EventResult::Continue) {
        let Ok(event) = event_rx.try_recv() else {
            break;
        };
        result = process_event(controller, &event, has_open_command);
    }

    result
}

fn process_event(
    controller: &mut TuiController<'_>,
    event: &Event,
    has_open_command: bool,
) -> EventResult {
    let Some(picker_event) = event::translate_event(controller.host_mut(), event) else {
        return EventResult::Continue;
    };

    match controller.handle(picker_event) {
        Ok(Transition::Browsing) => EventResult::Continue,
        Ok(Transition::Committed(path)) if has_open_command => EventResult::Open(path),
        Ok(Transition::Committed(path)) => EventResult::Quit(PickerExit::Selected(path)),
        Ok(Transition::Cancelled) => EventResult::Quit(PickerExit::Cancelled),
        // Already reported to the host and shown in the footer.
        Err(_) => EventResult::Continue,
    }
}

fn run_open_command(command: &[String], path: &Path) {
    let Some((program, args)) = command.split_first() else {
        return;
    };

    info!(program = %program, path = %path.display(), "running open command");
    match Command::new(program).args(args).arg(path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => warn!(program = %program, %status, "open command exited unsuccessfully"),
        Err(error) => warn!(program = %program, error = %error, "failed to run open command"),
    }
}

fn render_frame(controller: &TuiController<'_>, terminal: &mut TuiTerminal) -> io::Result<()> {
    terminal.draw(|frame| {
        ui::render(frame, controller.host().render_context());
    })?;

    Ok(())
}
