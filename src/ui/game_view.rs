use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;
use super::screen::Mirror;

pub fn render(frame: &mut Frame, mirror: &Mirror) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_board(frame, mirror, chunks[1]);
    render_message(frame, mirror.message(), chunks[2]);
    render_controls(frame, mirror.controls(), chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Two players, one board: line up four to win")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, mirror: &Mirror, area: Rect) {
    let board = Paragraph::new(board_widget::board_lines(mirror)).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

fn render_message(frame: &mut Frame, message: &str, area: Rect) {
    let msg_widget = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, controls: &[(String, String)], area: Rect) {
    let text = controls
        .iter()
        .map(|(key, description)| format!("{key}: {description}"))
        .collect::<Vec<_>>()
        .join("  |  ");

    let controls = Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
