//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Rows reserved below the message (blank line + button row)
    pub footer_height: u16,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            footer_height: 0,
            max_width: 60,
        }
    }
}

const PADDING: u16 = 4;

fn max_line_width(config: &DialogConfig) -> usize {
    config.max_width.saturating_sub(PADDING + 2).max(1) as usize
}

/// Centered rectangle the dialog occupies inside `area`
pub fn dialog_area(area: Rect, config: &DialogConfig, min_width: u16) -> Rect {
    let wrapped_lines = wrap_text(config.message, max_line_width(config));

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_width = (content_width + PADDING + 2)
        .max(min_width)
        .min(config.max_width)
        .min(area.width);

    // Title + blank + message lines + footer + borders
    let dialog_height = (2 + wrapped_lines.len() as u16 + config.footer_height + 2)
        .max(5)
        .min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    }
}

/// Render the dialog frame, title and message into `dialog`. Returns the
/// inner area so callers can draw their footer into its last rows.
pub fn render_dialog(frame: &mut Frame, dialog: Rect, config: &DialogConfig) -> Rect {
    frame.render_widget(Clear, dialog);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in wrap_text(config.message, max_line_width(config)) {
        content.push(Line::from(line));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog);

    let dialog_widget = Paragraph::new(content)
        .block(block)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(dialog_widget, dialog);

    inner
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
