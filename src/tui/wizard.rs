//! # Wizard Controller
//!
//! Routes every `TuiEvent` to the handler of the active screen, forwards it
//! to the widget that screen owns, and turns widget outcomes into core
//! `Action`s.
//!
//! ```text
//! TuiEvent ──► Resize? ──► quit key? ──► match session.screen
//!                                            ├── Home           → cursor / SelectHome (upload or quit entry)
//!                                            ├── FileSelection  → csv or html picker
//!                                            ├── SubjectInput   → text field
//!                                            ├── Confirmation   → cursor / Confirm
//!                                            └── Progress       → Tick
//! ```
//!
//! The returned `Effect` tells the run loop whether to arm a tick or stop.

use std::path::PathBuf;

use log::{debug, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::state::{FileStage, Screen, Session};
use crate::tui::component::EventHandler;
use crate::tui::components::{FilePickerState, PickerEvent, ProgressBar, TextField, TextFieldEvent};
use crate::tui::event::TuiEvent;

pub const CSV_TYPES: &[&str] = &[".csv"];
pub const HTML_TYPES: &[&str] = &[".html"];
pub const SUBJECT_PLACEHOLDER: &str = "Enter email subject";

/// Widget state owned by the wizard (not part of the core session)
pub struct TuiState {
    pub csv_picker: FilePickerState,
    pub html_picker: FilePickerState,
    pub subject_field: TextField,
    pub progress_bar: ProgressBar,
}

impl TuiState {
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            csv_picker: FilePickerState::new(CSV_TYPES, start_dir.clone()),
            html_picker: FilePickerState::new(HTML_TYPES, start_dir),
            subject_field: TextField::new(SUBJECT_PLACEHOLDER),
            progress_bar: ProgressBar::new(),
        }
    }
}

pub struct Wizard {
    pub session: Session,
    pub tui: TuiState,
}

impl Wizard {
    /// Both pickers start in `start_dir`, or the home directory when `None`.
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        let start_dir = start_dir.or_else(home_dir).unwrap_or_default();
        Self {
            session: Session::new(),
            tui: TuiState::new(start_dir),
        }
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn handle_event(&mut self, event: TuiEvent) -> Effect {
        if let TuiEvent::Resize(width, height) = event {
            self.tui.progress_bar.set_terminal_width(width);
            return update(&mut self.session, Action::Resize(width, height));
        }

        if Self::is_quit_key(&event) {
            return update(&mut self.session, Action::Quit);
        }

        match self.session.screen {
            Screen::Home => self.handle_home(&event),
            Screen::FileSelection => self.handle_file_selection(&event),
            Screen::SubjectInput => self.handle_subject_input(&event),
            Screen::Confirmation => self.handle_confirmation(&event),
            Screen::Progress => self.handle_progress(event),
            Screen::Quitting => Effect::None,
        }
    }

    /// `ctrl+c` and `q` quit from every screen, checked before any widget
    /// sees the key.
    fn is_quit_key(event: &TuiEvent) -> bool {
        matches!(event, TuiEvent::ForceQuit | TuiEvent::InputChar('q'))
    }

    fn handle_home(&mut self, event: &TuiEvent) -> Effect {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                update(&mut self.session, Action::CursorUp)
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                update(&mut self.session, Action::CursorDown)
            }
            TuiEvent::Submit => {
                let effect = update(&mut self.session, Action::SelectHome);
                if self.session.screen == Screen::FileSelection {
                    self.tui.csv_picker.reload();
                }
                effect
            }
            _ => Effect::None,
        }
    }

    fn handle_file_selection(&mut self, event: &TuiEvent) -> Effect {
        match self.session.file_stage() {
            FileStage::Csv => match self.tui.csv_picker.handle_event(event) {
                Some(PickerEvent::Selected(path)) => {
                    let effect = update(&mut self.session, Action::CsvChosen(path));
                    let dir = self.tui.csv_picker.current_dir().to_path_buf();
                    self.tui.html_picker.set_directory(dir);
                    effect
                }
                Some(PickerEvent::DirectoryChanged(dir)) => {
                    debug!("CSV picker moved to {}", dir.display());
                    Effect::None
                }
                None => Effect::None,
            },
            FileStage::Html => match self.tui.html_picker.handle_event(event) {
                Some(PickerEvent::Selected(path)) => {
                    let effect = update(&mut self.session, Action::HtmlChosen(path));
                    if self.session.screen == Screen::SubjectInput {
                        self.tui.subject_field.focus();
                    }
                    effect
                }
                Some(PickerEvent::DirectoryChanged(dir)) => {
                    debug!("HTML picker moved to {}", dir.display());
                    Effect::None
                }
                None => Effect::None,
            },
        }
    }

    fn handle_subject_input(&mut self, event: &TuiEvent) -> Effect {
        match self.tui.subject_field.handle_event(event) {
            Some(TextFieldEvent::Committed(value)) => {
                update(&mut self.session, Action::CommitSubject(value))
            }
            _ => Effect::None,
        }
    }

    fn handle_confirmation(&mut self, event: &TuiEvent) -> Effect {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                update(&mut self.session, Action::CursorUp)
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                update(&mut self.session, Action::CursorDown)
            }
            TuiEvent::Submit => update(&mut self.session, Action::Confirm),
            _ => Effect::None,
        }
    }

    fn handle_progress(&mut self, event: TuiEvent) -> Effect {
        match event {
            TuiEvent::Tick(now) => {
                let effect = update(&mut self.session, Action::Tick(now));
                self.tui.progress_bar.fraction = self.session.progress;
                effect
            }
            _ => Effect::None,
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    let home = dirs::home_dir();
    if home.is_none() {
        warn!("Could not determine home directory, file pickers start unset");
    }
    home
}
