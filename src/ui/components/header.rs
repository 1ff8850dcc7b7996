//! View header component
//!
//! Renders the view title and a one-line subtitle

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Title on top, subtitle (or the busy label while a request is in flight) below.
pub fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str, busy: Option<&str>) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(title.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (text, color) = match busy {
        Some(label) => (label.to_string(), Color::LightYellow),
        None => (subtitle.to_string(), Color::Gray),
    };
    let subtitle = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(subtitle, header_chunks[1]);
}
