//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the grid,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input Modes
//!
//! - **Grid**: arrows / `hjkl` move, `r` resets, `Enter` submits,
//!   `Tab` or `i` focuses the email field, `q` / `Esc` quits.
//! - **Email**: keystrokes edit the field, `Enter` submits,
//!   `Tab` / `Esc` returns to Grid.
//!
//! `Ctrl+C` quits and `Ctrl+R` resets in either mode. Keypad buttons can be
//! clicked in either mode.
//!
//! ## Submissions
//!
//! `Effect::Submit` spawns a tokio task that awaits the result sink and sends
//! `Action::SubmissionFinished` back over a channel. The loop drains that
//! channel every tick, so the grid stays usable while the request is out.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::GridController;
use crate::core::grid::Direction;
use crate::submission::{HttpResultSink, ResultPayload, ResultSink};
use crate::tui::component::EventHandler;
use crate::tui::components::{EmailEvent, EmailInput, Keypad};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ScreenLayout;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive the marker.
    Grid,
    /// Keys edit the email field.
    Email,
}

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub email_input: EmailInput,
    pub input_mode: InputMode,
    pub endpoint: String,
}

impl TuiState {
    pub fn new(endpoint: String) -> Self {
        Self {
            email_input: EmailInput::new(),
            input_mode: InputMode::Grid,
            endpoint,
        }
    }
}

/// What a key means once the input mode has been taken into account.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Core(Action),
    Focus(InputMode),
}

/// Grid-mode key bindings.
fn grid_command(event: &TuiEvent) -> Option<Command> {
    let action = match event {
        TuiEvent::CursorLeft | TuiEvent::InputChar('h') => Action::Move(Direction::Left),
        TuiEvent::CursorRight | TuiEvent::InputChar('l') => Action::Move(Direction::Right),
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => Action::Move(Direction::Up),
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => Action::Move(Direction::Down),
        TuiEvent::InputChar('r') => Action::Reset,
        TuiEvent::Submit => Action::Submit,
        TuiEvent::Escape | TuiEvent::InputChar('q') => Action::Quit,
        TuiEvent::Tab | TuiEvent::InputChar('i') | TuiEvent::Paste(_) => {
            return Some(Command::Focus(InputMode::Email));
        }
        _ => return None,
    };
    Some(Command::Core(action))
}

/// Email-mode bindings: focus changes here, everything else goes to the field.
fn email_command(event: &TuiEvent, input: &mut EmailInput) -> Option<Command> {
    match event {
        TuiEvent::Tab | TuiEvent::Escape => Some(Command::Focus(InputMode::Grid)),
        _ => match input.handle_event(event)? {
            EmailEvent::Changed(text) => Some(Command::Core(Action::SetEmail(text))),
            EmailEvent::Submit => Some(Command::Core(Action::Submit)),
        },
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let sink: Arc<dyn ResultSink> = Arc::new(HttpResultSink::new(config.endpoint.clone()));
    let mut controller = GridController::new(sink);
    let mut tui = TuiState::new(config.endpoint);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true;

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &controller.state, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let command = match &event {
                TuiEvent::Resize => continue,
                TuiEvent::ForceQuit => Some(Command::Core(Action::Quit)),
                TuiEvent::Reset => Some(Command::Core(Action::Reset)),
                TuiEvent::MouseClick(column, row) => {
                    let keypad = ScreenLayout::new(terminal.get_frame().area()).keypad;
                    Keypad::hit_test(keypad, *column, *row)
                        .map(|button| Command::Core(button.action()))
                }
                _ => match tui.input_mode {
                    InputMode::Grid => grid_command(&event),
                    InputMode::Email => email_command(&event, &mut tui.email_input),
                },
            };

            match command {
                Some(Command::Core(action)) => {
                    if dispatch(&mut controller, action, &tx) {
                        should_quit = true;
                    }
                }
                Some(Command::Focus(mode)) => {
                    debug!("Input mode: {:?}", mode);
                    tui.input_mode = mode;
                    // A paste in Grid mode is meant for the email field
                    if matches!(event, TuiEvent::Paste(_))
                        && let Some(Command::Core(action)) =
                            email_command(&event, &mut tui.email_input)
                    {
                        dispatch(&mut controller, action, &tx);
                    }
                }
                None => {}
            }
            tui.email_input.sync(&controller.state.email);
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions (submission results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut controller, action, &tx);
            tui.email_input.sync(&controller.state.email);
        }
    };

    ratatui::restore();
    result
}

/// Runs one action through the reducer and performs its effect.
/// Returns `true` when the app should quit.
fn dispatch(controller: &mut GridController, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(controller, action) {
        Effect::Submit(payload) => {
            spawn_submission(controller.sink.clone(), payload, tx.clone());
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

fn spawn_submission(sink: Arc<dyn ResultSink>, payload: ResultPayload, tx: mpsc::Sender<Action>) {
    info!("Spawning submission via '{}' sink", sink.name());
    tokio::spawn(async move {
        let result = sink.submit(&payload).await;
        if tx.send(Action::SubmissionFinished(result)).is_err() {
            warn!("Failed to send submission result: receiver dropped");
        }
    });
}
