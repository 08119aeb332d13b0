use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::app::state::AppState;
use crate::ui::{theme, widgets};

pub fn render(f: &mut Frame, state: &AppState) {
    let pal = theme::palette(state.theme);

    f.render_widget(Block::default().style(pal.base), f.area());

    // Header, page body, status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::render_header(f, vertical[0], state, pal);
    widgets::render_page(f, vertical[1], state, pal);
    widgets::render_status_bar(f, vertical[2], state, pal);

    if state.notice.is_some() {
        widgets::render_notice_modal(f, f.area(), state, pal);
    }
}
