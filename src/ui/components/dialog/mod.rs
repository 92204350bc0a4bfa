//! Dialog components for TUI

mod alert_dialog;
mod base;

pub use alert_dialog::{alert_button_areas, alert_dialog_area, render_alert_dialog};
