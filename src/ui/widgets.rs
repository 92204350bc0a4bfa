//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list scrolled so the cursor row stays visible. Pick lists are
/// usually taller than the rows a step can spare for them.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, cursor: Option<usize>) {
    let mut list_state = ListState::default().with_selected(cursor);
    frame.render_stateful_widget(list, area, &mut list_state);
}
