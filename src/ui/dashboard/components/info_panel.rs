//! Dashboard info panel component
//!
//! Renders connection and session information

use crate::environment::Environment;

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Formats an elapsed duration as `1h 2m 3s` (or `2m 3s` under an hour).
pub fn format_uptime(secs: u64) -> String {
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("API: {}", state.environment.api_url()),
        Style::default().fg(env_color),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("Versão: {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::Cyan),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("Sessão: {}", format_uptime(state.start_time.elapsed().as_secs())),
        Style::default().fg(Color::LightGreen),
    )]));

    if state.loaded {
        info_lines.push(Line::from(vec![Span::styled(
            format!(
                "Registros: {} ({} inativos)",
                state.total_records,
                state.inactive_records()
            ),
            Style::default().fg(Color::LightYellow),
        )]));
    }

    let info_block = Block::default()
        .title("SESSÃO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(59), "0m 59s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }
}
