//! Field rendering utilities for the wizard

use crate::state::{FileSlot, FormField, UploadProgress};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn titled_block(label: &str, is_active: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Input line content: the value plus a cursor when focused
fn input_lines<'a>(field: &'a FormField, is_active: bool, placeholder: &'a str) -> Vec<Line<'a>> {
    let value = field.as_text();
    if value.is_empty() && !is_active {
        return vec![Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l, text_style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
        }
    }
    lines
}

/// Draw a text field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let content = Paragraph::new(input_lines(field, is_active, "(empty)"));
    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(titled_block(&field.label, is_active)),
        area,
    );
}

/// One row of a pick list
pub struct PickEntry {
    pub label: String,
    pub selected: bool,
}

/// Draw a pick list. The cursor is only shown while the field has focus.
pub fn draw_pick_list(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    entries: &[PickEntry],
    cursor: usize,
    is_active: bool,
    empty_message: &str,
) {
    let block = titled_block(label, is_active);

    if entries.is_empty() {
        let hint = Paragraph::new(Span::styled(
            empty_message,
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(hint.block(block), area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let (marker, style) = if entry.selected {
                ("● ", Style::default().fg(Color::Green))
            } else {
                ("○ ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry.label.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    render_scrollable_list(frame, area, list, is_active.then_some(cursor));
}

/// Draw a list of committed entries above the input used to add more
pub fn draw_entry_list(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    entries: &[String],
    input: &FormField,
    is_active: bool,
) {
    let mut lines = Vec::new();
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "(none)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let mut chips = Vec::new();
        for entry in entries {
            chips.push(Span::styled(
                format!(" {entry} "),
                Style::default().fg(Color::Black).bg(Color::Blue),
            ));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));
    }

    let mut prompt = vec![Span::styled("+ ", Style::default().fg(Color::DarkGray))];
    if let Some(line) = input_lines(input, is_active, "type and press Enter to add")
        .into_iter()
        .next()
    {
        prompt.extend(line.spans);
    }
    lines.push(Line::from(prompt));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(titled_block(label, is_active)),
        area,
    );
}

/// Draw a file slot: the attached file and its upload progress, then the
/// path input
pub fn draw_file_slot(
    frame: &mut Frame,
    area: Rect,
    slot: &FileSlot,
    input: &FormField,
    required: bool,
    is_active: bool,
) {
    let kind = slot.kind;
    let suffix = if required { "" } else { " (optional)" };
    let label = format!(
        "{}{suffix}: {}, max {}",
        kind.label(),
        kind.allowed_extensions().join("/"),
        kind.max_size_label()
    );

    let attached = match &slot.file {
        Some(file) => {
            let (status, color) = match &slot.progress {
                UploadProgress::Idle => (String::new(), Color::Gray),
                UploadProgress::Uploading => (" uploading…".to_string(), Color::Yellow),
                UploadProgress::Uploaded { .. } => (" uploaded".to_string(), Color::Green),
                UploadProgress::Failed { error } => (format!(" failed: {error}"), Color::Red),
            };
            Line::from(vec![
                Span::styled(
                    format!("{} ({})", file.file_name, file.size_label()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(status, Style::default().fg(color)),
            ])
        }
        None => Line::from(Span::styled(
            "No file selected",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let mut prompt = vec![Span::styled("path ", Style::default().fg(Color::DarkGray))];
    if let Some(line) = input_lines(input, is_active, "type a path and press Enter")
        .into_iter()
        .next()
    {
        prompt.extend(line.spans);
    }

    frame.render_widget(
        Paragraph::new(vec![attached, Line::from(prompt)]).block(titled_block(&label, is_active)),
        area,
    );
}
