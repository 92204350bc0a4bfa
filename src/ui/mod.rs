//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod widgets;

pub use components::{alert_button_areas, alert_dialog_area};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    layout::draw_header(frame, regions.header, app);
    layout::draw_step_sidebar(frame, regions.sidebar, app);
    forms::draw_step(frame, regions.main, app);
    layout::draw_status_bar(frame, regions.status, app);

    // Modal last so it covers everything
    components::render_alert_dialog(frame, &app.state.alert);
}
