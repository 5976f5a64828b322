//! # ProgressBar Component
//!
//! Renders the send fraction as a 0–100% gauge. The fraction is a prop from
//! the session; the width is presentation state driven by resize events.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Gauge;

use crate::core::action::{MAX_PROGRESS_WIDTH, PROGRESS_PADDING};
use crate::tui::component::Component;

pub struct ProgressBar {
    /// Fraction in [0, 1] (Prop)
    pub fraction: f64,
    width: u16,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            fraction: 0.0,
            width: MAX_PROGRESS_WIDTH,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Fit the bar to a terminal of the given width, capped at `MAX_PROGRESS_WIDTH`.
    pub fn set_terminal_width(&mut self, terminal_width: u16) {
        self.width = terminal_width
            .saturating_sub(PROGRESS_PADDING * 2 + 4)
            .min(MAX_PROGRESS_WIDTH);
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(1),
            ..area
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
            .ratio(self.fraction.clamp(0.0, 1.0))
            .use_unicode(true);
        frame.render_widget(gauge, bar_area);
    }
}
