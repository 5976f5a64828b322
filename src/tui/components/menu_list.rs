//! # MenuList Component
//!
//! Small set of labelled actions with a cursor. Stateless: the items and the
//! cursor are props, cursor movement happens in the core reducer.
//!
//! Two looks:
//! - `Marker::Arrow` for the home menu: `> CSV and HTML Upload`
//! - `Marker::Radio` for the confirmation: `(•) Yes` / `( ) No`

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Arrow,
    Radio,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

pub struct MenuList<'a> {
    pub items: &'a [MenuItem<'a>],
    pub cursor: usize,
    pub marker: Marker,
    pub alignment: Alignment,
}

impl<'a> MenuList<'a> {
    pub fn new(items: &'a [MenuItem<'a>], cursor: usize, marker: Marker) -> Self {
        Self {
            items,
            cursor,
            marker,
            alignment: Alignment::Left,
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Rows needed to show every item.
    pub fn height(&self) -> u16 {
        self.items
            .iter()
            .map(|item| if item.description.is_some() { 2 } else { 1 })
            .sum()
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            let is_selected = i == self.cursor;
            let prefix = match (self.marker, is_selected) {
                (Marker::Arrow, true) => "> ",
                (Marker::Arrow, false) => "  ",
                (Marker::Radio, true) => "(•) ",
                (Marker::Radio, false) => "( ) ",
            };
            let style = if is_selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(item.title, style),
            ]));
            if let Some(description) = item.description {
                lines.push(Line::from(Span::styled(
                    description,
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines
    }
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines()).alignment(self.alignment);
        frame.render_widget(paragraph, area);
    }
}
