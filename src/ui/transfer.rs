//! Transfer view
//!
//! Source and destination are cycled with the arrow keys among the active
//! benefits loaded when the view opened.

use super::app::{Action, Route};
use super::utils::field_border_style;
use crate::forms::{TransferField, TransferForm};
use crate::models::Beneficio;
use crate::pretty::format_brl;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, PartialEq)]
pub struct TransferState {
    pub form: TransferForm,
    pub focus: TransferField,
}

/// Next id after `current` in `ids` (wrapping), skipping `skip`.
fn cycle(ids: &[i64], current: Option<i64>, forward: bool, skip: Option<i64>) -> Option<i64> {
    let candidates: Vec<i64> = ids.iter().copied().filter(|id| Some(*id) != skip).collect();
    if candidates.is_empty() {
        return None;
    }
    let len = candidates.len();
    let next = match current.and_then(|c| candidates.iter().position(|id| *id == c)) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(candidates[next])
}

impl TransferState {
    pub fn new(ativos: Vec<Beneficio>) -> Self {
        Self {
            form: TransferForm::new(ativos),
            focus: TransferField::From,
        }
    }

    pub fn captures_text(&self) -> bool {
        self.focus == TransferField::Amount
    }

    fn ids(&self) -> Vec<i64> {
        self.form.ativos().iter().map(|b| b.id).collect()
    }

    fn move_selection(&mut self, forward: bool) {
        let ids = self.ids();
        match self.focus {
            TransferField::From => {
                if let Some(id) = cycle(&ids, self.form.from_id(), forward, None) {
                    self.form.select_source(id);
                }
            }
            TransferField::To => {
                if let Some(id) = cycle(&ids, self.form.to_id(), forward, self.form.from_id()) {
                    self.form.select_destination(id);
                }
            }
            TransferField::Amount => {}
        }
    }

    fn leave_focus(&mut self) {
        if self.focus == TransferField::Amount {
            self.form.touch_amount();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Navigate(Route::Dashboard),
            KeyCode::Tab | KeyCode::Down => {
                self.leave_focus();
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.leave_focus();
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Right => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Left => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Enter => {
                self.form.touch_amount();
                if self.form.can_submit() {
                    Action::Transfer
                } else {
                    Action::None
                }
            }
            KeyCode::Char(c) if self.focus == TransferField::Amount => {
                if c.is_ascii_digit() || c == ',' || c == '.' {
                    self.form.amount.push(c);
                }
                Action::None
            }
            KeyCode::Backspace if self.focus == TransferField::Amount => {
                self.form.amount.pop();
                Action::None
            }
            _ => Action::None,
        }
    }
}

pub const TRANSFER_HINTS: &str =
    "[←/→] Escolher benefício | [Tab] Próximo campo | [Enter] Transferir | [Esc] Voltar";

fn describe(beneficio: Option<&Beneficio>) -> String {
    match beneficio {
        Some(b) => format!("#{} {} ({})", b.id, b.nome, format_brl(b.valor)),
        None => "Selecione...".to_string(),
    }
}

pub fn render_transfer(f: &mut Frame, area: Rect, state: &TransferState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    let form = &state.form;
    if form.ativos().is_empty() {
        let empty = Paragraph::new("Nenhum benefício ativo disponível para transferência.")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(empty, chunks[0]);
        return;
    }

    let from_error = form
        .is_amount_touched()
        .then(|| form.field_error(TransferField::From))
        .flatten();
    render_picker(
        f,
        chunks[0],
        TransferField::From,
        state.focus == TransferField::From,
        describe(form.selected_source()),
        from_error.map(|e| e.to_string()),
    );

    let to_error = form
        .is_amount_touched()
        .then(|| form.field_error(TransferField::To))
        .flatten();
    render_picker(
        f,
        chunks[1],
        TransferField::To,
        state.focus == TransferField::To,
        describe(form.selected_destination()),
        to_error.map(|e| e.to_string()),
    );

    let amount_focused = state.focus == TransferField::Amount;
    let amount_error = form.visible_amount_error();
    let mut amount_lines = vec![Line::from(format!(
        "R$ {}{}",
        form.amount,
        if amount_focused { "▏" } else { "" }
    ))];
    if let Some(error) = amount_error {
        amount_lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    let amount = Paragraph::new(amount_lines).block(
        Block::default()
            .title(format!("{} *", TransferField::Amount))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(field_border_style(amount_focused, amount_error.is_some())),
    );
    f.render_widget(amount, chunks[2]);

    if let Some(source) = form.selected_source() {
        let balance = Paragraph::new(Line::from(vec![
            Span::styled("Saldo disponível: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_brl(source.valor),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().borders(Borders::NONE));
        f.render_widget(balance, chunks[3]);
    }
}

fn render_picker(
    f: &mut Frame,
    area: Rect,
    field: TransferField,
    focused: bool,
    value: String,
    error: Option<String>,
) {
    let mut lines = vec![Line::from(format!("◀ {} ▶", value))];
    if let Some(error) = &error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(format!("{} *", field))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(field_border_style(focused, error.is_some())),
    );
    f.render_widget(widget, area);
}
