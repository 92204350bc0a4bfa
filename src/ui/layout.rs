//! Layout components (header, step sidebar, status bar)

use super::components::{render_step_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{NEXT_STEP_SHORTCUT, PREV_STEP_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ContentType, FieldId, Step};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of the wizard
pub struct WizardLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub status: Rect,
}

/// Split the screen: header on top, status bar at the bottom, step list on
/// the left of the form
pub fn create_layout(area: Rect) -> WizardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Step list
            Constraint::Min(0),     // Form
        ])
        .split(rows[1]);

    WizardLayout {
        header: rows[0],
        sidebar: columns[0],
        main: columns[1],
        status: rows[2],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.state.content_type() {
        ContentType::Workflow => " Upload workflow ",
        ContentType::AiApp => " Publish AI app ",
    };
    let header = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.base_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Step list, one button per step
pub fn draw_step_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let navigator = &app.state.navigator;
    let total = navigator.total();

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend((0..total).map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for step in (1..=total).filter_map(Step::from_number) {
        let number = step.number();
        render_step_button(
            frame,
            chunks[number as usize],
            number,
            step.title(app.state.content_type()),
            number == navigator.current(),
            number < navigator.current(),
        );
    }
}

fn field_hint(field: FieldId) -> &'static str {
    match field {
        FieldId::Country | FieldId::Category | FieldId::Tags | FieldId::PriceType => {
            "↑↓:move  Enter/Space:select"
        }
        FieldId::CustomTags | FieldId::PresetQuestions => "Enter:add  Backspace:remove last",
        FieldId::File(_) => "Enter:attach  Del:clear",
        FieldId::Description | FieldId::ApiCode | FieldId::OpeningMessage => "Enter:new line",
        FieldId::Actions => "←→:choose  Enter:press",
        _ => "type to edit",
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let mut spans = vec![Span::raw(" ")];

    if state.is_submitting {
        spans.push(Span::styled(
            "● submitting ",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        format!(
            "Tab:next field  {}  {NEXT_STEP_SHORTCUT}/{PREV_STEP_SHORTCUT}:step  {SUBMIT_SHORTCUT}:submit  Esc:quit",
            field_hint(state.active_field())
        ),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
