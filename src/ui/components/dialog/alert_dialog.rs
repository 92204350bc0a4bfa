//! Modal alert dialog
//!
//! Geometry is exposed separately from rendering so mouse handling can tell
//! a click on a button from a click on the backdrop.

use super::base::{dialog_area, render_dialog, DialogConfig};
use crate::state::{AlertButton, AlertSeverity, AlertState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

const MAX_WIDTH: u16 = 64;
const MIN_WIDTH: u16 = 32;
const BUTTON_GAP: u16 = 2;

fn severity_color(severity: AlertSeverity) -> Color {
    match severity {
        AlertSeverity::Info => Color::Cyan,
        AlertSeverity::Success => Color::Green,
        AlertSeverity::Warning => Color::Yellow,
        AlertSeverity::Error => Color::Red,
    }
}

fn heading(alert: &AlertState) -> String {
    format!("{} {}", alert.severity.icon(), alert.title)
}

fn config<'a>(alert: &'a AlertState, heading: &'a str) -> DialogConfig<'a> {
    let color = severity_color(alert.severity);
    DialogConfig {
        title: heading,
        title_color: color,
        border_color: color,
        message: &alert.message,
        footer_height: 2,
        max_width: MAX_WIDTH,
    }
}

fn button_label(label: &str) -> String {
    format!("[ {label} ]")
}

/// Area the alert occupies on a screen of size `area`
pub fn alert_dialog_area(area: Rect, alert: &AlertState) -> Rect {
    let heading = heading(alert);
    dialog_area(area, &config(alert, &heading), MIN_WIDTH)
}

/// Button hit boxes inside a dialog drawn at `dialog`, left to right
pub fn alert_button_areas(dialog: Rect, alert: &AlertState) -> Vec<(AlertButton, Rect)> {
    let mut buttons = Vec::new();
    if let Some(cancel) = &alert.cancel_label {
        buttons.push((AlertButton::Cancel, button_label(cancel)));
    }
    buttons.push((AlertButton::Confirm, button_label(&alert.confirm_label)));

    let total: u16 = buttons
        .iter()
        .map(|(_, label)| label.chars().count() as u16)
        .sum::<u16>()
        + BUTTON_GAP * (buttons.len() as u16 - 1);

    // Last row inside the bottom border
    let row = dialog.y + dialog.height.saturating_sub(2);
    let inner_width = dialog.width.saturating_sub(2);
    let mut x = dialog.x + 1 + inner_width.saturating_sub(total) / 2;

    buttons
        .into_iter()
        .map(|(button, label)| {
            let width = label.chars().count() as u16;
            let rect = Rect::new(x, row, width, 1);
            x += width + BUTTON_GAP;
            (button, rect)
        })
        .collect()
}

/// Render the alert over the whole frame
pub fn render_alert_dialog(frame: &mut Frame, alert: &AlertState) {
    if !alert.open {
        return;
    }

    let heading = heading(alert);
    let config = config(alert, &heading);
    let dialog = dialog_area(frame.area(), &config, MIN_WIDTH);
    render_dialog(frame, dialog, &config);

    for (button, rect) in alert_button_areas(dialog, alert) {
        let label = match button {
            AlertButton::Confirm => &alert.confirm_label,
            AlertButton::Cancel => alert.cancel_label.as_ref().unwrap_or(&alert.confirm_label),
        };
        let style = if alert.focused == button {
            Style::default()
                .fg(Color::Black)
                .bg(severity_color(alert.severity))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::Black)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(button_label(label), style)),
            rect.intersection(frame.area()),
        );
    }
}
