//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a button with an optional accent color used when it is not focused
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Option<Color>,
) {
    let idle = if is_enabled {
        accent.unwrap_or(Color::White)
    } else {
        Color::DarkGray
    };

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected && is_enabled {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(idle)
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a step entry in the progress sidebar
pub fn render_step_button(
    frame: &mut Frame,
    area: Rect,
    number: u8,
    label: &str,
    is_current: bool,
    is_done: bool,
) {
    let marker = if is_done { "✔" } else { " " };
    let content = format!("{marker} {number}. {label}");
    let accent = is_done.then_some(Color::Green);
    render_action_button(frame, area, &content, is_current, true, accent);
}
