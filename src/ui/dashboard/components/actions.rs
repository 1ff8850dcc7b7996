//! Dashboard quick actions panel

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("L", "Ver Benefícios"),
    ("N", "Novo Benefício"),
    ("T", "Transferir Saldo"),
];

pub fn render_actions_panel(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = QUICK_ACTIONS
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", key),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*label, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let block = Block::default()
        .title("AÇÕES RÁPIDAS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
