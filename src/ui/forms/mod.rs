//! Wizard form rendering
//!
//! - `field_renderer`: drawing primitives for text, list and file fields
//! - `steps`: maps each wizard field to its primitive

mod field_renderer;
mod steps;

use crate::app::App;
use crate::state::{FieldId, WizardButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows a field needs; list fields take what is left
fn field_constraint(field: FieldId) -> Constraint {
    match field {
        FieldId::Title
        | FieldId::CustomCountry
        | FieldId::CustomCategory
        | FieldId::Price
        | FieldId::RuntimeDuration => Constraint::Length(3),
        FieldId::Description | FieldId::ApiCode | FieldId::OpeningMessage => {
            Constraint::Length(5)
        }
        FieldId::CustomTags | FieldId::PresetQuestions | FieldId::File(_) => {
            Constraint::Length(4)
        }
        FieldId::PriceType => Constraint::Length(5),
        FieldId::Country | FieldId::Category | FieldId::Tags => Constraint::Min(4),
        FieldId::Actions => Constraint::Length(BUTTON_HEIGHT),
    }
}

/// Draw the current wizard step
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let navigator = &state.navigator;

    let block = Block::default()
        .title(format!(
            " Step {}/{}: {} ",
            navigator.current(),
            navigator.total(),
            navigator.step().title(state.content_type())
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = state.visible_fields();
    let constraints: Vec<Constraint> = fields.iter().map(|f| field_constraint(*f)).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (field, chunk) in fields.iter().zip(chunks.iter()) {
        match field {
            FieldId::Actions => draw_actions(frame, *chunk, app),
            _ => steps::draw_wizard_field(frame, *chunk, state, *field),
        }
    }
}

/// Back / Next (or Submit) row
fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let is_focused = state.is_active(FieldId::Actions);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(2),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .split(area);

    render_action_button(
        frame,
        chunks[0],
        "← Back",
        is_focused && state.selected_button == WizardButton::Back,
        !state.navigator.is_first(),
        None,
    );

    let forward_label = if state.is_submitting {
        "Submitting…"
    } else if state.navigator.is_last() {
        "Submit"
    } else {
        "Next →"
    };
    render_action_button(
        frame,
        chunks[2],
        forward_label,
        is_focused && state.selected_button == WizardButton::Forward,
        !state.is_submitting,
        Some(Color::Green),
    );
}
