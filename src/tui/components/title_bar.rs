//! # TitleBar Component
//!
//! One-line screen heading with a step indicator, e.g.
//! `File Selection  ·  Step 1 of 4`.
//!
//! Purely presentational: all data arrives as props, so the same bar serves
//! every wizard screen.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Number of steps the user walks through before the send starts.
pub const TOTAL_STEPS: usize = 4;

pub struct TitleBar {
    /// Screen heading (e.g., "Email Subject")
    pub title: String,
    /// 1-based step number, `None` for screens outside the numbered steps
    pub step: Option<usize>,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, step: Option<usize>) -> Self {
        Self {
            title: title.into(),
            step,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title.as_str(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(step) = self.step {
            spans.push(Span::styled(
                format!("  ·  Step {step} of {TOTAL_STEPS}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
