use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::state::{CONFIRM_CHOICES, FileStage, HomeChoice, Screen, Session, display_path};
use crate::tui::component::Component;
use crate::tui::components::{Banner, FilePicker, Marker, MenuItem, MenuList, TitleBar};
use crate::tui::wizard::{TuiState, Wizard};

pub const GOODBYE: &str = "Goodbye!";
const QUIT_HINT: &str = "(q to quit)";
const CARD_WIDTH: u16 = 90;
const CARD_HEIGHT: u16 = 26;

pub fn draw_ui(frame: &mut Frame, wizard: &mut Wizard) {
    let Wizard { session, tui } = wizard;
    let area = frame.area();

    if session.quitting {
        frame.render_widget(Paragraph::new(GOODBYE), area);
        return;
    }

    // Sync props with session state
    tui.progress_bar.fraction = session.progress;

    if session.screen == Screen::Home {
        draw_home(frame, area, session);
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .padding(Padding::new(2, 2, 1, 0));
    let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let show_quit_hint = session.screen != Screen::Progress;
    let [title_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(u16::from(show_quit_hint)),
    ])
    .areas(inner);

    let (title, step) = screen_title(session);
    TitleBar::new(title, step).render(frame, title_area);

    match session.screen {
        Screen::FileSelection => draw_file_selection(frame, body_area, session, tui),
        Screen::SubjectInput => draw_subject_input(frame, body_area, tui),
        Screen::Confirmation => draw_confirmation(frame, body_area, session),
        Screen::Progress => draw_progress(frame, body_area, tui),
        Screen::Home | Screen::Quitting => {}
    }

    if show_quit_hint {
        frame.render_widget(
            Paragraph::new(QUIT_HINT).style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }
}

fn screen_title(session: &Session) -> (&'static str, Option<usize>) {
    match (session.screen, session.file_stage()) {
        (Screen::FileSelection, FileStage::Csv) => ("File Selection", Some(1)),
        (Screen::FileSelection, FileStage::Html) => ("File Selection", Some(2)),
        (Screen::SubjectInput, _) => ("Email Subject", Some(3)),
        (Screen::Confirmation, _) => ("Confirmation", Some(4)),
        (Screen::Progress, _) => ("Sending", None),
        (Screen::Home | Screen::Quitting, _) => ("", None),
    }
}

fn draw_home(frame: &mut Frame, area: Rect, session: &Session) {
    let items: Vec<MenuItem> = HomeChoice::ALL
        .iter()
        .map(|choice| MenuItem {
            title: choice.title(),
            description: Some(choice.description()),
        })
        .collect();
    let mut menu = MenuList::new(&items, session.menu_cursor, Marker::Arrow)
        .alignment(Alignment::Center);

    let [banner_area, _, menu_area] = Layout::vertical([
        Constraint::Length(Banner::height()),
        Constraint::Length(2),
        Constraint::Length(menu.height()),
    ])
    .flex(Flex::Center)
    .areas(area);

    Banner.render(frame, banner_area);
    menu.render(frame, menu_area);
}

fn draw_file_selection(frame: &mut Frame, area: Rect, session: &Session, tui: &mut TuiState) {
    let stage = session.file_stage();
    let (picker, prompt) = match stage {
        FileStage::Csv => (&mut tui.csv_picker, "Select CSV file:"),
        FileStage::Html => (&mut tui.html_picker, "Select HTML file:"),
    };

    let mut lines = Vec::new();
    if let Some(csv_path) = &session.csv_path {
        lines.push(Line::from(format!("CSV file: {}", csv_path.display())));
    }
    lines.push(Line::from(format!(
        "Current Directory: {}",
        picker.current_dir().display()
    )));
    lines.push(Line::from(prompt));

    let [header_area, picker_area, help_area] = Layout::vertical([
        Constraint::Length(lines.len() as u16 + 1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines), header_area);
    FilePicker::new(picker).render(frame, picker_area);
    frame.render_widget(
        Paragraph::new("enter open · backspace up · tab hidden files")
            .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_subject_input(frame: &mut Frame, area: Rect, tui: &mut TuiState) {
    let [prompt_area, field_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    frame.render_widget(Paragraph::new("Enter the email subject:"), prompt_area);
    tui.subject_field.render(frame, field_area);
}

fn draw_confirmation(frame: &mut Frame, area: Rect, session: &Session) {
    let summary = vec![
        Line::from(format!("CSV file: {}", display_path(&session.csv_path))),
        Line::from(format!("HTML file: {}", display_path(&session.html_path))),
        Line::from(format!("Subject: {}", session.subject)),
        Line::default(),
        Line::from("Send emails?"),
    ];

    let items: Vec<MenuItem> = CONFIRM_CHOICES
        .iter()
        .map(|&title| MenuItem {
            title,
            description: None,
        })
        .collect();
    let mut choices = MenuList::new(&items, session.confirm_cursor, Marker::Radio);

    let [summary_area, choices_area] = Layout::vertical([
        Constraint::Length(summary.len() as u16),
        Constraint::Length(choices.height()),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(summary), summary_area);
    choices.render(frame, choices_area);
}

fn draw_progress(frame: &mut Frame, area: Rect, tui: &mut TuiState) {
    let [bar_area, _, status_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let muted = Style::default().fg(Color::DarkGray);
    tui.progress_bar.render(frame, bar_area);
    frame.render_widget(Paragraph::new("Sending emails...").style(muted), status_area);
    frame.render_widget(Paragraph::new("Press q to quit").style(muted), hint_area);
}

/// Center a box of at most `width` x `height` inside `outer`.
fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    center
}
