//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;

use tempfile::TempDir;

use crate::tui::event::TuiEvent;
use crate::tui::wizard::Wizard;

/// A scratch directory laid out like a user's mailing folder:
///
/// ```text
/// data.csv
/// tpl.html
/// notes.txt
/// templates/
/// ├── list.csv
/// └── welcome.html
/// ```
pub fn mail_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("data.csv"), "email,name\na@example.com,A\n").unwrap();
    fs::write(dir.path().join("tpl.html"), "<p>Hello {{name}}</p>").unwrap();
    fs::write(dir.path().join("notes.txt"), "not listed").unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("list.csv"), "email\n").unwrap();
    fs::write(templates.join("welcome.html"), "<p>Welcome</p>").unwrap();
    dir
}

/// Feed each character of `text` to the wizard as a key press.
pub fn type_text(wizard: &mut Wizard, text: &str) {
    for c in text.chars() {
        wizard.handle_event(TuiEvent::InputChar(c));
    }
}
