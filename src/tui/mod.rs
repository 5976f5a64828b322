//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, translates crossterm input
//! into `TuiEvent`s, hands them to the `Wizard`, and renders the active screen.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One event is fully processed (session updated, frame redrawn) before the
//! next is read. Three sources feed the loop:
//!
//! - **Keys** from crossterm
//! - **Resize** from crossterm
//! - **Tick**: a single pending deadline armed by `Effect::ScheduleTick`.
//!   While a deadline is pending the poll timeout shrinks to reach it; when it
//!   passes, `TuiEvent::Tick(now)` is delivered like any other input.
//!
//! `Effect::Quit` draws the final frame and leaves the loop, which drops any
//! pending deadline, so no tick is ever delivered after termination.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;
pub mod wizard;

pub use event::TuiEvent;
pub use wizard::Wizard;

use log::{debug, info};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::Effect;
use crate::core::state::Session;
use crate::error::WizardError;
use crate::tui::event::poll_event_timeout;

/// Poll timeout while no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Non-blinking: avoids blink timer reset from continuous redraws
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Show);
    }
}

/// Run the wizard to completion and return the final session.
///
/// `start_dir` overrides the directory both file pickers open in.
pub fn run(start_dir: Option<PathBuf>) -> Result<Session, WizardError> {
    let mut wizard = Wizard::new(start_dir);
    let mut terminal = ratatui::try_init()?;

    let result = TerminalModeGuard::new()
        .map_err(WizardError::from)
        .and_then(|_guard| event_loop(&mut terminal, &mut wizard));

    ratatui::restore();
    result?;

    let session = wizard.into_session();
    info!(
        "Wizard finished (confirmed: {}, quitting: {})",
        session.confirmed, session.quitting
    );
    Ok(session)
}

/// What the loop does next: deliver a due tick or wait for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wait {
    Tick,
    Poll(Duration),
}

/// The single pending tick deadline of the run loop.
#[derive(Debug, Default)]
struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    /// Replace any pending deadline with `now + delay`.
    fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    /// A due deadline is consumed, so each arm yields at most one tick.
    fn next_wait(&mut self, now: Instant) -> Wait {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Wait::Tick
            }
            Some(deadline) => Wait::Poll(deadline - now),
            None => Wait::Poll(IDLE_POLL),
        }
    }

    /// Apply a reducer effect. Returns `false` when the loop must stop.
    fn apply(&mut self, effect: Effect, now: Instant) -> bool {
        match effect {
            Effect::None => true,
            Effect::ScheduleTick(delay) => {
                debug!("Tick armed in {:?}", delay);
                self.arm(now, delay);
                true
            }
            Effect::Quit => {
                self.cancel();
                false
            }
        }
    }
}

fn event_loop(terminal: &mut DefaultTerminal, wizard: &mut Wizard) -> Result<(), WizardError> {
    let size = terminal.size()?;
    wizard.handle_event(TuiEvent::Resize(size.width, size.height));
    info!("Event loop started ({}x{})", size.width, size.height);

    let mut timer = TickTimer::default();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, wizard))?;
            needs_redraw = false;
        }

        let event = match timer.next_wait(Instant::now()) {
            Wait::Tick => Some(TuiEvent::Tick(Instant::now())),
            Wait::Poll(timeout) => poll_event_timeout(timeout)?,
        };
        let Some(event) = event else { continue };
        needs_redraw = true;

        let effect = wizard.handle_event(event);
        if !timer.apply(effect, Instant::now()) {
            terminal.draw(|f| ui::draw_ui(f, wizard))?;
            break;
        }
    }

    Ok(())
}
