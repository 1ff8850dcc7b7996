//! Modal notifications
//!
//! Alerts and the delete confirmation. While one is open the view
//! underneath receives no keys.

use super::app::Action;
use super::utils::centered_rect;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    /// Runs the action when accepted.
    Confirm(Action),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// What the user did with an open notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Ignored,
    Dismissed,
    Confirmed(Action),
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn confirm(message: impl Into<String>, on_accept: Action) -> Self {
        Self {
            kind: NotificationKind::Confirm(on_accept),
            message: message.into(),
        }
    }

    pub fn handle_key(&self, key: KeyEvent) -> Reply {
        match &self.kind {
            NotificationKind::Confirm(action) => match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('y')
                | KeyCode::Char('Y') | KeyCode::Enter => Reply::Confirmed(action.clone()),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Reply::Dismissed,
                _ => Reply::Ignored,
            },
            _ => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Reply::Dismissed,
                _ => Reply::Ignored,
            },
        }
    }

    fn title_and_color(&self) -> (&'static str, Color) {
        match self.kind {
            NotificationKind::Success => ("SUCESSO", Color::LightGreen),
            NotificationKind::Error => ("ERRO", Color::LightRed),
            NotificationKind::Confirm(_) => ("CONFIRMAÇÃO", Color::LightYellow),
        }
    }

    fn hint(&self) -> &'static str {
        match self.kind {
            NotificationKind::Confirm(_) => "[S] Sim  [N] Não",
            _ => "[Enter] OK",
        }
    }
}

pub fn render_notification(f: &mut Frame, notification: &Notification) {
    let (title, color) = notification.title_and_color();
    let area = centered_rect(60, 9, f.area());

    let lines = vec![
        Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            notification.hint(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_alert_dismissed_by_enter_only_keys() {
        let alert = Notification::success("Benefício criado com sucesso!");
        assert_eq!(alert.handle_key(key(KeyCode::Enter)), Reply::Dismissed);
        assert_eq!(alert.handle_key(key(KeyCode::Char('q'))), Reply::Ignored);
    }

    #[test]
    fn test_confirm_returns_pending_action() {
        let confirm = Notification::confirm("Inativar?", Action::Delete(3));
        assert_eq!(
            confirm.handle_key(key(KeyCode::Char('s'))),
            Reply::Confirmed(Action::Delete(3))
        );
        assert_eq!(confirm.handle_key(key(KeyCode::Char('n'))), Reply::Dismissed);
        assert_eq!(confirm.handle_key(key(KeyCode::Tab)), Reply::Ignored);
    }
}
