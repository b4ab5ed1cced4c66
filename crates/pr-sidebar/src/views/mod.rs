//! Views
//!
//! Views only draw. Everything they show comes from a view model built from
//! the state on every frame.

use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod detail_view;
pub mod layout;
pub mod sidebar_entry_widget;
pub mod sidebar_view;
pub mod status_bar;

use layout::AppLayout;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let layout = AppLayout::new(area, state.app_config.sidebar_width);

    sidebar_view::render(state, layout.sidebar, f);
    detail_view::render(state, layout.detail, f);
    status_bar::render(state, layout.status_bar, f);
}
