//! # File Picker Component
//!
//! Directory browser that surfaces subdirectories plus files matching a set
//! of allowed extensions. Two independent instances exist: one for `.csv`
//! data files, one for `.html` templates.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilePickerState` lives in `TuiState`
//! - `FilePicker` is created each frame with borrowed state
//!
//! ## Keys
//!
//! - `up`/`k`, `down`/`j`, `home`/`g`, `end`/`G`, page up/down: move the cursor
//! - `enter`/`right`/`l`: open a directory or pick a file
//! - `backspace`/`left`/`h`/`esc`: go to the parent directory
//! - `tab`: show or hide dotfiles
//!
//! A directory that cannot be read is not fatal: the error is kept and
//! rendered in place of the listing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, warn};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EMPTY_DIRECTORY_MESSAGE: &str = "No files found in this directory.";

const DEFAULT_PAGE_SIZE: usize = 10;

/// One row of the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Events emitted by the file picker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// A file with an allowed extension was chosen.
    Selected(PathBuf),
    /// The picker moved into another directory.
    DirectoryChanged(PathBuf),
}

/// Persistent state for a file picker.
pub struct FilePickerState {
    allowed_types: Vec<String>,
    current_dir: PathBuf,
    entries: Vec<PickerEntry>,
    error: Option<String>,
    show_hidden: bool,
    selected: usize,
    // Cursor positions of the parent directories, restored on the way back up
    selected_stack: Vec<usize>,
    page_size: usize,
    list_state: ListState,
}

impl FilePickerState {
    /// Create a picker rooted at `start_dir`. Nothing is read until `reload`.
    pub fn new(allowed_types: &[&str], start_dir: PathBuf) -> Self {
        Self {
            allowed_types: allowed_types
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            current_dir: start_dir,
            entries: Vec::new(),
            error: None,
            show_hidden: false,
            selected: 0,
            selected_stack: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            list_state: ListState::default(),
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Jump to another directory, forgetting the cursor history.
    pub fn set_directory(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.selected = 0;
        self.selected_stack.clear();
        self.reload();
    }

    /// Re-read the current directory.
    pub fn reload(&mut self) {
        match read_entries(&self.current_dir, &self.allowed_types, self.show_hidden) {
            Ok(entries) => {
                debug!(
                    "Listed {} entries in {}",
                    entries.len(),
                    self.current_dir.display()
                );
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                warn!(
                    "Failed to read directory {}: {}",
                    self.current_dir.display(),
                    e
                );
                self.entries.clear();
                self.error = Some(format!("Error reading directory: {e}"));
            }
        }
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
        self.sync_list_state();
    }

    fn sync_list_state(&mut self) {
        if self.entries.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected));
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(self.entries.len() - 1);
        self.sync_list_state();
    }

    fn open_selected(&mut self) -> Option<PickerEvent> {
        let entry = self.entries.get(self.selected)?.clone();
        if entry.is_dir {
            self.selected_stack.push(self.selected);
            self.current_dir = entry.path;
            self.selected = 0;
            self.reload();
            Some(PickerEvent::DirectoryChanged(self.current_dir.clone()))
        } else {
            Some(PickerEvent::Selected(entry.path))
        }
    }

    fn open_parent(&mut self) -> Option<PickerEvent> {
        let parent = self.current_dir.parent()?.to_path_buf();
        if parent.as_os_str().is_empty() {
            return None;
        }
        self.current_dir = parent;
        self.selected = self.selected_stack.pop().unwrap_or(0);
        self.reload();
        Some(PickerEvent::DirectoryChanged(self.current_dir.clone()))
    }
}

impl EventHandler for FilePickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.move_by(-1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.move_by(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_by(-(self.page_size as isize));
                None
            }
            TuiEvent::PageDown => {
                self.move_by(self.page_size as isize);
                None
            }
            TuiEvent::Home | TuiEvent::InputChar('g') => {
                self.selected = 0;
                self.sync_list_state();
                None
            }
            TuiEvent::End | TuiEvent::InputChar('G') => {
                self.selected = self.entries.len().saturating_sub(1);
                self.sync_list_state();
                None
            }
            TuiEvent::Submit | TuiEvent::CursorRight | TuiEvent::InputChar('l') => {
                self.open_selected()
            }
            TuiEvent::Backspace
            | TuiEvent::CursorLeft
            | TuiEvent::InputChar('h')
            | TuiEvent::Escape => self.open_parent(),
            TuiEvent::Tab => {
                self.show_hidden = !self.show_hidden;
                self.reload();
                None
            }
            _ => None,
        }
    }
}

/// List `dir`: every subdirectory plus files with an allowed extension.
/// Directories sort first, then entries by case-insensitive name.
fn read_entries(
    dir: &Path,
    allowed_types: &[String],
    show_hidden: bool,
) -> io::Result<Vec<PickerEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        // Follow symlinks so a linked directory can be entered
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        let is_dir = metadata.is_dir();
        if !is_dir && !has_allowed_extension(&path, allowed_types) {
            continue;
        }
        entries.push(PickerEntry {
            name,
            path,
            is_dir,
            size: metadata.len(),
            modified: metadata.modified().ok(),
        });
    }
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    Ok(entries)
}

fn has_allowed_extension(path: &Path, allowed_types: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| allowed_types.iter().any(|allowed| *allowed == ext))
}

/// Transient render wrapper for a file picker.
pub struct FilePicker<'a> {
    state: &'a mut FilePickerState,
}

impl<'a> FilePicker<'a> {
    pub fn new(state: &'a mut FilePickerState) -> Self {
        Self { state }
    }
}

impl Component for FilePicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.page_size = (area.height as usize).max(1);

        if let Some(error) = &self.state.error {
            let message = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
            frame.render_widget(message, area);
            return;
        }

        if self.state.entries.is_empty() {
            let empty = Paragraph::new(EMPTY_DIRECTORY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        // Layout: "  12.3kB  Jan 15 10:42  name"
        let name_width = (area.width as usize).saturating_sub(25);
        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = i == self.state.selected;
                let name = if entry.is_dir {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                };

                let name_style = match (is_selected, entry.is_dir) {
                    (true, _) => Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                    (false, true) => Style::default().fg(Color::Cyan),
                    (false, false) => Style::default(),
                };
                let meta_style = Style::default().fg(Color::DarkGray);
                let size = if entry.is_dir {
                    String::new()
                } else {
                    format_size(entry.size)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(if is_selected { "> " } else { "  " }, name_style),
                    Span::styled(format!("{size:>7}  "), meta_style),
                    Span::styled(format!("{:<12}  ", format_modified(entry.modified)), meta_style),
                    Span::styled(truncate_str(&name, name_width), name_style),
                ]))
            })
            .collect();

        frame.render_stateful_widget(List::new(items), area, &mut self.state.list_state);
    }
}

/// Format a byte count with a decimal unit, e.g. "12.3kB".
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}B")
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}

/// Format a modification time as "Jan 15 10:42" in local time.
fn format_modified(modified: Option<SystemTime>) -> String {
    use chrono::{DateTime, Local};
    modified
        .map(|t| DateTime::<Local>::from(t).format("%b %d %H:%M").to_string())
        .unwrap_or_default()
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
