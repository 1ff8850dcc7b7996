//! Dashboard summary cards
//!
//! Total, active count and average over the active benefits

use super::super::state::DashboardState;
use crate::pretty::format_brl;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let summary = &state.summary;
    let placeholder = |value: String| {
        if state.loaded { value } else { "-".to_string() }
    };

    render_card(
        f,
        chunks[0],
        "Total em Benefícios",
        placeholder(format_brl(summary.total)),
        Color::LightGreen,
    );
    render_card(
        f,
        chunks[1],
        "Benefícios Ativos",
        placeholder(summary.active_count.to_string()),
        Color::LightBlue,
    );
    render_card(
        f,
        chunks[2],
        "Média por Benefício",
        placeholder(format_brl(summary.average)),
        Color::LightYellow,
    );
}

fn render_card(f: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(card, area);
}
