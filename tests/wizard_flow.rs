use std::fs;
use std::time::{Duration, Instant};

use mailwizard::core::action::{RUN_DURATION, TICK_INTERVAL};
use mailwizard::tui::{TuiEvent, Wizard};
use mailwizard::{Effect, Screen};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Scratch directory with one CSV, one HTML template and a stray text file
fn create_mail_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.csv"), "email\nx@example.com\n").unwrap();
    fs::write(dir.path().join("tpl.html"), "<h1>Hi</h1>").unwrap();
    fs::write(dir.path().join("readme.txt"), "ignored").unwrap();
    dir
}

fn send(wizard: &mut Wizard, events: &[TuiEvent]) -> Effect {
    let mut effect = Effect::None;
    for event in events {
        effect = wizard.handle_event(event.clone());
    }
    effect
}

fn type_text(wizard: &mut Wizard, text: &str) {
    for c in text.chars() {
        wizard.handle_event(TuiEvent::InputChar(c));
    }
}

/// Home → CSV → HTML → subject, leaving the wizard on Confirmation
fn walk_to_confirmation(wizard: &mut Wizard, subject: &str) {
    // Each listing holds exactly one matching file
    send(wizard, &[TuiEvent::Submit, TuiEvent::Submit, TuiEvent::Submit]);
    assert_eq!(wizard.session.screen, Screen::SubjectInput);
    type_text(wizard, subject);
    wizard.handle_event(TuiEvent::Submit);
    assert_eq!(wizard.session.screen, Screen::Confirmation);
}

// ============================================================================
// Full runs
// ============================================================================

#[test]
fn test_confirmed_run_prints_summary() {
    let dir = create_mail_dir();
    let mut wizard = Wizard::new(Some(dir.path().to_path_buf()));
    wizard.handle_event(TuiEvent::Resize(80, 24));

    walk_to_confirmation(&mut wizard, "Welcome");
    let effect = wizard.handle_event(TuiEvent::Submit);
    assert_eq!(effect, Effect::ScheduleTick(TICK_INTERVAL));
    assert_eq!(wizard.session.screen, Screen::Progress);

    let start = Instant::now();
    let mut now = start;
    let mut effect = wizard.handle_event(TuiEvent::Tick(now));
    while effect != Effect::Quit {
        assert_eq!(effect, Effect::ScheduleTick(TICK_INTERVAL));
        now += Duration::from_millis(500);
        effect = wizard.handle_event(TuiEvent::Tick(now));
    }
    assert!(now - start >= RUN_DURATION);
    assert!(wizard.session.quitting);

    let session = wizard.into_session();
    let expected = format!(
        "Emails sent using CSV file: {}, HTML template: {}, and subject: Welcome",
        dir.path().join("data.csv").display(),
        dir.path().join("tpl.html").display()
    );
    assert_eq!(session.summary(), expected);
}

#[test]
fn test_declined_run_is_cancelled() {
    let dir = create_mail_dir();
    let mut wizard = Wizard::new(Some(dir.path().to_path_buf()));

    walk_to_confirmation(&mut wizard, "Welcome");
    wizard.handle_event(TuiEvent::CursorDown);
    let effect = wizard.handle_event(TuiEvent::Submit);
    assert_eq!(effect, Effect::Quit);

    let session = wizard.into_session();
    assert!(!session.confirmed);
    assert_eq!(session.summary(), "Operation cancelled.");
}

#[test]
fn test_quit_from_home() {
    let dir = create_mail_dir();
    let mut wizard = Wizard::new(Some(dir.path().to_path_buf()));

    let effect = wizard.handle_event(TuiEvent::InputChar('q'));
    assert_eq!(effect, Effect::Quit);
    assert!(wizard.session.quitting);
    assert!(!wizard.session.confirmed);
    assert_eq!(wizard.into_session().summary(), "Operation cancelled.");
}

#[test]
fn test_home_quit_entry() {
    let dir = create_mail_dir();
    let mut wizard = Wizard::new(Some(dir.path().to_path_buf()));

    let effect = send(&mut wizard, &[TuiEvent::CursorDown, TuiEvent::Submit]);
    assert_eq!(effect, Effect::Quit);
    assert_eq!(wizard.session.screen, Screen::Quitting);
    assert!(wizard.session.csv_path.is_none());
}

#[test]
fn test_quit_mid_progress_keeps_confirmation() {
    let dir = create_mail_dir();
    let mut wizard = Wizard::new(Some(dir.path().to_path_buf()));

    walk_to_confirmation(&mut wizard, "Launch");
    wizard.handle_event(TuiEvent::Submit);
    let start = Instant::now();
    wizard.handle_event(TuiEvent::Tick(start));
    wizard.handle_event(TuiEvent::Tick(start + Duration::from_secs(1)));

    let effect = wizard.handle_event(TuiEvent::InputChar('q'));
    assert_eq!(effect, Effect::Quit);
    let session = wizard.into_session();
    assert!(session.confirmed);
    assert!(session.summary().ends_with("and subject: Launch"));
}

#[test]
fn test_empty_subject_is_accepted() {
    let dir = create_mail_dir();
    let mut wizard = Wizard::new(Some(dir.path().to_path_buf()));

    walk_to_confirmation(&mut wizard, "");
    assert!(wizard.session.subject.is_empty());
}

#[test]
fn test_q_on_subject_screen_cancels() {
    let dir = create_mail_dir();
    let mut wizard = Wizard::new(Some(dir.path().to_path_buf()));

    send(&mut wizard, &[TuiEvent::Submit, TuiEvent::Submit, TuiEvent::Submit]);
    assert_eq!(wizard.session.screen, Screen::SubjectInput);
    type_text(&mut wizard, "Sale");

    let effect = wizard.handle_event(TuiEvent::InputChar('q'));
    assert_eq!(effect, Effect::Quit);
    let session = wizard.into_session();
    assert!(session.quitting);
    assert!(session.subject.is_empty());
    assert_eq!(session.summary(), "Operation cancelled.");
}
