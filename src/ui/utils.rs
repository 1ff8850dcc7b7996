//! UI utility functions
//!
//! Helpers shared by the views and their components

use crate::events::Origin;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};

/// Get a ratatui color for the view an event came from
pub fn get_origin_color(origin: &Origin) -> Color {
    match origin {
        Origin::Dashboard => Color::Cyan,
        Origin::List => Color::LightBlue,
        Origin::Form => Color::Yellow,
        Origin::Transfer => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) else {
        return timestamp.to_string();
    };
    match (date_part.get(5..10), time_part.get(0..5)) {
        (Some(month_day), Some(hour_min)) => format!("{} {}", month_day, hour_min),
        _ => timestamp.to_string(),
    }
}

/// Replace verbose transport errors with something a user can act on
pub fn clean_http_error_message(msg: &str) -> String {
    let lower = msg.to_lowercase();
    if lower.contains("error sending request") || lower.contains("connection refused") {
        return "Servidor indisponível".to_string();
    }
    if lower.contains("timed out") {
        return "Tempo de resposta esgotado".to_string();
    }
    msg.to_string()
}

/// A rectangle of `width` x `height` cells centered in `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Border style for a form field, highlighted when focused.
pub fn field_border_style(focused: bool, has_error: bool) -> Style {
    match (focused, has_error) {
        (_, true) => Style::default().fg(Color::LightRed),
        (true, false) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::DarkGray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-03-07 14:05:59"), "03-07 14:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message("error sending request for url (http://localhost:8080/)"),
            "Servidor indisponível"
        );
        assert_eq!(
            clean_http_error_message("operation timed out"),
            "Tempo de resposta esgotado"
        );
        assert_eq!(clean_http_error_message("Saldo insuficiente"), "Saldo insuficiente");
    }

    #[test]
    fn test_centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));

        let rect = centered_rect(100, 100, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }
}
