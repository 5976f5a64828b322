//! # Session State
//!
//! The one mutable record threaded through a wizard run. This module holds
//! domain state only - no terminal types. Widget state (file listings, the
//! text buffer) lives in the `tui` module.
//!
//! ```text
//! Session
//! ├── screen: Screen                  // active screen, exactly one
//! ├── csv_path: Option<PathBuf>       // set once, never cleared
//! ├── html_path: Option<PathBuf>      // never set before csv_path
//! ├── subject: String                 // committed from the text field
//! ├── menu_cursor: usize              // Home menu (clamped)
//! ├── confirm_cursor: usize           // Yes/No choice (wraps)
//! ├── confirmed: bool                 // written only by the Confirmation screen
//! ├── quitting: bool                  // next frame is the goodbye line
//! ├── run_started_at: Option<Instant> // first Progress tick
//! ├── progress: f64                   // fraction shown by the progress bar
//! └── terminal_size: (u16, u16)       // last known width/height
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use std::path::PathBuf;
use std::time::Instant;

/// Mutually exclusive wizard screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    FileSelection,
    SubjectInput,
    Confirmation,
    Progress,
    Quitting,
}

/// Sub-stage of the file selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
    Csv,
    Html,
}

/// Entries of the home menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeChoice {
    Upload,
    Quit,
}

impl HomeChoice {
    pub const ALL: [Self; 2] = [Self::Upload, Self::Quit];

    pub fn title(self) -> &'static str {
        match self {
            Self::Upload => "CSV and HTML Upload",
            Self::Quit => "Quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Upload => "Pick CSV and HTML files for email",
            Self::Quit => "Exit the application",
        }
    }
}

/// Labels of the confirmation choice. Index 0 sends, index 1 cancels.
pub const CONFIRM_CHOICES: [&str; 2] = ["Yes", "No"];

#[derive(Debug, Clone)]
pub struct Session {
    pub screen: Screen,
    pub csv_path: Option<PathBuf>,
    pub html_path: Option<PathBuf>,
    pub subject: String,
    pub menu_cursor: usize,
    pub confirm_cursor: usize,
    pub confirmed: bool,
    pub quitting: bool,
    pub run_started_at: Option<Instant>,
    pub progress: f64,
    pub terminal_size: (u16, u16),
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            csv_path: None,
            html_path: None,
            subject: String::new(),
            menu_cursor: 0,
            confirm_cursor: 0,
            confirmed: false,
            quitting: false,
            run_started_at: None,
            progress: 0.0,
            terminal_size: (0, 0),
        }
    }

    /// Which picker is active on the file selection screen.
    pub fn file_stage(&self) -> FileStage {
        if self.csv_path.is_none() {
            FileStage::Csv
        } else {
            FileStage::Html
        }
    }

    /// The home menu entry under the cursor.
    pub fn home_choice(&self) -> HomeChoice {
        HomeChoice::ALL[self.menu_cursor.min(HomeChoice::ALL.len() - 1)]
    }

    /// Line printed after the terminal is restored.
    pub fn summary(&self) -> String {
        if self.confirmed {
            format!(
                "Emails sent using CSV file: {}, HTML template: {}, and subject: {}",
                display_path(&self.csv_path),
                display_path(&self.html_path),
                self.subject
            )
        } else {
            "Operation cancelled.".to_string()
        }
    }
}

/// Render an optional path, empty when unset.
pub fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new_defaults() {
        let session = Session::new();
        assert_eq!(session.screen, Screen::Home);
        assert!(session.csv_path.is_none());
        assert!(session.html_path.is_none());
        assert!(session.subject.is_empty());
        assert!(!session.confirmed);
        assert!(!session.quitting);
        assert_eq!(session.file_stage(), FileStage::Csv);
    }

    #[test]
    fn test_file_stage_follows_csv_path() {
        let mut session = Session::new();
        session.csv_path = Some(PathBuf::from("/home/u/data.csv"));
        assert_eq!(session.file_stage(), FileStage::Html);
    }

    #[test]
    fn test_summary_when_confirmed() {
        let mut session = Session::new();
        session.csv_path = Some(PathBuf::from("/home/u/data.csv"));
        session.html_path = Some(PathBuf::from("/home/u/tpl.html"));
        session.subject = "Welcome".to_string();
        session.confirmed = true;
        assert_eq!(
            session.summary(),
            "Emails sent using CSV file: /home/u/data.csv, HTML template: /home/u/tpl.html, and subject: Welcome"
        );
    }

    #[test]
    fn test_summary_when_cancelled() {
        let mut session = Session::new();
        session.csv_path = Some(PathBuf::from("/home/u/data.csv"));
        assert_eq!(session.summary(), "Operation cancelled.");
    }

    #[test]
    fn test_home_choice_order() {
        let mut session = Session::new();
        assert_eq!(session.home_choice(), HomeChoice::Upload);
        session.menu_cursor = 1;
        assert_eq!(session.home_choice(), HomeChoice::Quit);
        assert_eq!(HomeChoice::Upload.title(), "CSV and HTML Upload");
    }
}
