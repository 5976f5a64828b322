//! # Actions
//!
//! Everything that changes the session becomes an `Action`.
//! User picks a CSV file? That's `Action::CsvChosen(path)`.
//! Timer fires on the progress screen? That's `Action::Tick(now)`.
//!
//! The `update()` function applies an action to the session and returns an
//! `Effect` the run loop must carry out. No I/O here. Timer re-arming is a
//! returned value, not a hidden side effect.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! Actions that make no sense for the active screen are ignored, so the
//! screen path can only ever move forward:
//!
//! ```text
//! Home → FileSelection(Csv) → FileSelection(Html) → SubjectInput → Confirmation → Progress
//!   └──────────────────────────── Quit from anywhere ─────────────────────────────→ Quitting
//! ```

use log::{debug, info};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::core::state::{CONFIRM_CHOICES, HomeChoice, Screen, Session};

/// How long the simulated send runs.
pub const RUN_DURATION: Duration = Duration::from_secs(5);
/// Interval between progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Upper bound for the rendered progress bar width.
pub const MAX_PROGRESS_WIDTH: u16 = 100;
/// Horizontal padding around the progress bar.
pub const PROGRESS_PADDING: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Enter on the home menu: starts the upload or quits, per the cursor
    SelectHome,
    CursorUp,
    CursorDown,
    CsvChosen(PathBuf),
    HtmlChosen(PathBuf),
    CommitSubject(String),
    Confirm,
    Tick(Instant),
    Resize(u16, u16),
    Quit,
}

/// What the run loop must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver a `Tick` after the given delay.
    ScheduleTick(Duration),
    /// Stop requesting frames.
    Quit,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::Quit => quit(session),
        Action::Resize(width, height) => {
            session.terminal_size = (width, height);
            Effect::None
        }
        Action::SelectHome if session.screen == Screen::Home => match session.home_choice() {
            HomeChoice::Upload => enter(session, Screen::FileSelection),
            HomeChoice::Quit => quit(session),
        },
        Action::CursorUp => move_cursor(session, -1),
        Action::CursorDown => move_cursor(session, 1),
        Action::CsvChosen(path)
            if session.screen == Screen::FileSelection && session.csv_path.is_none() =>
        {
            info!("CSV file selected: {}", path.display());
            session.csv_path = Some(path);
            Effect::None
        }
        Action::HtmlChosen(path)
            if session.screen == Screen::FileSelection
                && session.csv_path.is_some()
                && session.html_path.is_none() =>
        {
            info!("HTML template selected: {}", path.display());
            session.html_path = Some(path);
            enter(session, Screen::SubjectInput)
        }
        Action::CommitSubject(subject) if session.screen == Screen::SubjectInput => {
            info!("Subject committed ({} chars)", subject.chars().count());
            session.subject = subject;
            enter(session, Screen::Confirmation)
        }
        Action::Confirm if session.screen == Screen::Confirmation => {
            session.confirmed = session.confirm_cursor == 0;
            info!("Confirmation answered: {}", CONFIRM_CHOICES[session.confirm_cursor]);
            if session.confirmed {
                enter(session, Screen::Progress);
                Effect::ScheduleTick(TICK_INTERVAL)
            } else {
                quit(session)
            }
        }
        Action::Tick(now) if session.screen == Screen::Progress => tick(session, now),
        other => {
            debug!("Ignoring {:?} on {:?}", other, session.screen);
            Effect::None
        }
    }
}

fn tick(session: &mut Session, now: Instant) -> Effect {
    let started = *session.run_started_at.get_or_insert(now);
    let elapsed = now.saturating_duration_since(started);
    if elapsed >= RUN_DURATION {
        info!("Send simulation finished after {:?}", elapsed);
        session.progress = 1.0;
        return quit(session);
    }
    let fraction = (elapsed.as_secs_f64() / RUN_DURATION.as_secs_f64()).clamp(0.0, 1.0);
    session.progress = session.progress.max(fraction);
    debug!("Progress tick: {:.3}", session.progress);
    Effect::ScheduleTick(TICK_INTERVAL)
}

fn move_cursor(session: &mut Session, delta: isize) -> Effect {
    match session.screen {
        Screen::Home => {
            session.menu_cursor = clamp_cursor(session.menu_cursor, delta, HomeChoice::ALL.len());
        }
        Screen::Confirmation => {
            session.confirm_cursor =
                wrap_cursor(session.confirm_cursor, delta, CONFIRM_CHOICES.len());
        }
        _ => {}
    }
    Effect::None
}

fn enter(session: &mut Session, screen: Screen) -> Effect {
    info!("Screen: {:?} -> {:?}", session.screen, screen);
    session.screen = screen;
    Effect::None
}

fn quit(session: &mut Session) -> Effect {
    if !session.quitting {
        info!("Quitting from {:?}", session.screen);
    }
    session.quitting = true;
    session.screen = Screen::Quitting;
    Effect::Quit
}

fn clamp_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    cursor.saturating_add_signed(delta).min(len.saturating_sub(1))
}

fn wrap_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::FileStage;

    fn at_confirmation() -> Session {
        let mut session = Session::new();
        update(&mut session, Action::SelectHome);
        update(&mut session, Action::CsvChosen("/home/u/data.csv".into()));
        update(&mut session, Action::HtmlChosen("/home/u/tpl.html".into()));
        update(&mut session, Action::CommitSubject("Welcome".to_string()));
        session
    }

    #[test]
    fn test_screen_path_without_quit() {
        let mut session = Session::new();
        let mut path = vec![(session.screen, session.file_stage())];

        update(&mut session, Action::SelectHome);
        path.push((session.screen, session.file_stage()));
        update(&mut session, Action::CsvChosen("/home/u/data.csv".into()));
        path.push((session.screen, session.file_stage()));
        update(&mut session, Action::HtmlChosen("/home/u/tpl.html".into()));
        path.push((session.screen, session.file_stage()));
        update(&mut session, Action::CommitSubject("Welcome".to_string()));
        path.push((session.screen, session.file_stage()));
        let effect = update(&mut session, Action::Confirm);
        path.push((session.screen, session.file_stage()));

        assert_eq!(
            path,
            vec![
                (Screen::Home, FileStage::Csv),
                (Screen::FileSelection, FileStage::Csv),
                (Screen::FileSelection, FileStage::Html),
                (Screen::SubjectInput, FileStage::Html),
                (Screen::Confirmation, FileStage::Html),
                (Screen::Progress, FileStage::Html),
            ]
        );
        assert_eq!(effect, Effect::ScheduleTick(TICK_INTERVAL));
        assert!(session.confirmed);
    }

    #[test]
    fn test_html_before_csv_is_ignored() {
        let mut session = Session::new();
        update(&mut session, Action::SelectHome);
        let effect = update(&mut session, Action::HtmlChosen("/home/u/tpl.html".into()));
        assert_eq!(effect, Effect::None);
        assert!(session.html_path.is_none());
        assert_eq!(session.screen, Screen::FileSelection);
    }

    #[test]
    fn test_second_csv_pick_does_not_replace_first() {
        let mut session = Session::new();
        update(&mut session, Action::SelectHome);
        update(&mut session, Action::CsvChosen("/a.csv".into()));
        update(&mut session, Action::CsvChosen("/b.csv".into()));
        assert_eq!(session.csv_path, Some(PathBuf::from("/a.csv")));
    }

    #[test]
    fn test_home_menu_clamps() {
        let mut session = Session::new();
        update(&mut session, Action::CursorUp);
        assert_eq!(session.menu_cursor, 0);
        update(&mut session, Action::CursorDown);
        update(&mut session, Action::CursorDown);
        assert_eq!(session.menu_cursor, 1);
    }

    #[test]
    fn test_home_quit_choice() {
        let mut session = Session::new();
        update(&mut session, Action::CursorDown);
        let effect = update(&mut session, Action::SelectHome);
        assert_eq!(effect, Effect::Quit);
        assert!(session.quitting);
        assert_eq!(session.screen, Screen::Quitting);
        assert!(!session.confirmed);
    }

    #[test]
    fn test_confirmation_cursor_wraps() {
        let mut session = at_confirmation();
        session.confirm_cursor = 1;
        update(&mut session, Action::CursorDown);
        assert_eq!(session.confirm_cursor, 0);
        update(&mut session, Action::CursorUp);
        assert_eq!(session.confirm_cursor, 1);
    }

    #[test]
    fn test_confirm_no_cancels() {
        let mut session = at_confirmation();
        update(&mut session, Action::CursorDown);
        let effect = update(&mut session, Action::Confirm);
        assert_eq!(effect, Effect::Quit);
        assert!(!session.confirmed);
        assert!(session.quitting);
        assert_eq!(session.summary(), "Operation cancelled.");
    }

    #[test]
    fn test_confirm_yes_summary() {
        let mut session = at_confirmation();
        update(&mut session, Action::Confirm);
        assert_eq!(
            session.summary(),
            "Emails sent using CSV file: /home/u/data.csv, HTML template: /home/u/tpl.html, and subject: Welcome"
        );
    }

    #[test]
    fn test_confirm_outside_confirmation_is_ignored() {
        let mut session = Session::new();
        let effect = update(&mut session, Action::Confirm);
        assert_eq!(effect, Effect::None);
        assert!(!session.confirmed);
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let mut session = at_confirmation();
        update(&mut session, Action::Confirm);

        let start = Instant::now();
        let mut last = 0.0;
        for offset in [0.0, 1.0, 4.9] {
            let effect = update(
                &mut session,
                Action::Tick(start + Duration::from_secs_f64(offset)),
            );
            assert_eq!(effect, Effect::ScheduleTick(TICK_INTERVAL));
            assert!((0.0..1.0).contains(&session.progress));
            assert!(session.progress >= last);
            last = session.progress;
        }
        assert!(!session.quitting);
        assert_eq!(session.run_started_at, Some(start));

        let effect = update(&mut session, Action::Tick(start + RUN_DURATION));
        assert_eq!(effect, Effect::Quit);
        assert!(session.quitting);

        // Already terminated: later ticks neither quit again nor re-arm
        let effect = update(&mut session, Action::Tick(start + Duration::from_secs(6)));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_tick_outside_progress_is_ignored() {
        let mut session = Session::new();
        let effect = update(&mut session, Action::Tick(Instant::now()));
        assert_eq!(effect, Effect::None);
        assert!(session.run_started_at.is_none());
    }

    #[test]
    fn test_quit_during_progress_keeps_confirmation() {
        let mut session = at_confirmation();
        update(&mut session, Action::Confirm);
        let effect = update(&mut session, Action::Quit);
        assert_eq!(effect, Effect::Quit);
        assert!(session.confirmed);
    }

    #[test]
    fn test_resize_records_terminal_size() {
        let mut session = Session::new();
        update(&mut session, Action::Resize(120, 40));
        assert_eq!(session.terminal_size, (120, 40));
        assert_eq!(session.screen, Screen::Home);
    }

    #[test]
    fn test_wrap_cursor() {
        assert_eq!(wrap_cursor(0, -1, 2), 1);
        assert_eq!(wrap_cursor(1, 1, 2), 0);
        assert_eq!(wrap_cursor(0, 1, 0), 0);
    }
}
