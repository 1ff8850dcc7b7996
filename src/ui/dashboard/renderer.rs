//! Dashboard main renderer

use super::components::{actions, info_panel, logs, stats};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Renders the dashboard body; the app draws header and footer around it.
pub fn render_dashboard(f: &mut Frame, area: Rect, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(area);

    stats::render_stats_section(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content_chunks[0]);

    actions::render_actions_panel(f, side_chunks[0]);
    info_panel::render_info_panel(f, side_chunks[1], state);
    logs::render_logs_panel(f, content_chunks[1], state);
}
