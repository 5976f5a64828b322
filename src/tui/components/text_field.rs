//! # TextField Component
//!
//! Single-line editable text with a placeholder.
//!
//! ## Responsibilities
//!
//! - Capture character input
//! - Handle editing (backspace, delete, cursor movement)
//! - Report the committed value on Enter
//!
//! Unlike a chat input, committing does not clear the buffer: the value
//! stays visible and `value()` keeps returning it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PROMPT: &str = "> ";

/// High-level events emitted by the TextField
#[derive(Debug, Clone, PartialEq)]
pub enum TextFieldEvent {
    /// Enter pressed; carries the value as it stands
    Committed(String),
    /// Buffer or cursor changed
    ContentChanged,
}

pub struct TextField {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pos: usize,
    placeholder: String,
    focused: bool,
}

impl TextField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            pos: 0,
            placeholder: placeholder.into(),
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Display column of the cursor, relative to the start of the value.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.pos].width() as u16
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prompt = Span::styled(PROMPT, Style::default().fg(Color::Magenta));
        let line = if self.buffer.is_empty() {
            Line::from(vec![
                prompt,
                Span::styled(self.placeholder.as_str(), Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![prompt, Span::raw(self.buffer.as_str())])
        };

        // Keep the cursor in view once the value outgrows the field
        let visible = area.width.saturating_sub(PROMPT.len() as u16 + 1);
        let scroll = self.cursor_column().saturating_sub(visible);
        frame.render_widget(Paragraph::new(line).scroll((0, scroll)), area);

        if self.focused {
            let x = area.x + PROMPT.len() as u16 + self.cursor_column() - scroll;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}

impl EventHandler for TextField {
    type Event = TextFieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                Some(TextFieldEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                TextFieldEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                TextFieldEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.pos > 0).then(|| {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                TextFieldEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.pos < self.buffer.len()).then(|| {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                TextFieldEvent::ContentChanged
            }),
            TuiEvent::Home => (self.pos != 0).then(|| {
                self.pos = 0;
                TextFieldEvent::ContentChanged
            }),
            TuiEvent::End => (self.pos != self.buffer.len()).then(|| {
                self.pos = self.buffer.len();
                TextFieldEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(TextFieldEvent::Committed(self.buffer.clone())),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
