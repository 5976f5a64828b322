//! # Banner Component
//!
//! Home screen title art with a version line underneath. Falls back to a
//! plain title when the terminal is narrower than the art.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const ART: &[&str] = &[
    r" __  __       _ _  __        ___                  _ ",
    r"|  \/  | __ _(_) | \ \      / (_)______ _ _ __ __| |",
    r"| |\/| |/ _` | | |  \ \ /\ / /| |_  / _` | '__/ _` |",
    r"| |  | | (_| | | |   \ V  V / | |/ / (_| | | | (_| |",
    r"|_|  |_|\__,_|_|_|    \_/\_/  |_/___\__,_|_|  \__,_|",
];

const PLAIN_TITLE: &str = "Mail Wizard";

pub struct Banner;

impl Banner {
    /// Rows the banner occupies: the art, a spacer, and the version line.
    pub fn height() -> u16 {
        ART.len() as u16 + 2
    }

    fn art_width() -> u16 {
        ART.iter().map(|line| line.width()).max().unwrap_or(0) as u16
    }
}

impl Component for Banner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let art_style = Style::default().fg(Color::Blue);
        let mut lines: Vec<Line> = if area.width >= Self::art_width() {
            ART.iter()
                .map(|line| Line::from(Span::styled(*line, art_style)))
                .collect()
        } else {
            vec![Line::from(Span::styled(
                PLAIN_TITLE,
                art_style.add_modifier(Modifier::BOLD),
            ))]
        };

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
