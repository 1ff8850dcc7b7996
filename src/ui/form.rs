//! Create/edit view

use super::app::{Action, Route};
use super::utils::field_border_style;
use crate::forms::{BeneficioField, BeneficioForm};
use crate::models::Beneficio;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Id of the record being edited; `None` when creating.
    pub editing: Option<i64>,
    pub form: BeneficioForm,
    pub focus: BeneficioField,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            editing: None,
            form: BeneficioForm::new(),
            focus: BeneficioField::Nome,
        }
    }

    pub fn edit(beneficio: &Beneficio) -> Self {
        Self {
            editing: Some(beneficio.id),
            form: BeneficioForm::from_beneficio(beneficio),
            focus: BeneficioField::Nome,
        }
    }

    pub fn title(&self) -> String {
        match self.editing {
            Some(id) => format!("EDITAR BENEFÍCIO #{}", id),
            None => "NOVO BENEFÍCIO".to_string(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Navigate(Route::List),
            KeyCode::Tab | KeyCode::Down => {
                self.form.touch(self.focus);
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.touch(self.focus);
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Enter => {
                self.form.touch_all();
                if self.form.is_valid() {
                    Action::Save
                } else {
                    Action::None
                }
            }
            KeyCode::Char(' ') if self.focus == BeneficioField::Ativo => {
                self.form.ativo = !self.form.ativo;
                Action::None
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.form.text_mut(self.focus) {
                    text.push(c);
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(text) = self.form.text_mut(self.focus) {
                    text.pop();
                }
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

pub const FORM_HINTS: &str =
    "[Tab] Próximo campo | [Espaço] Ativo/Inativo | [Enter] Salvar | [Esc] Cancelar";

pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
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

    let text_fields = [
        BeneficioField::Nome,
        BeneficioField::Valor,
        BeneficioField::Descricao,
    ];
    for (field, chunk) in text_fields.into_iter().zip(chunks.iter()) {
        render_text_field(f, *chunk, state, field);
    }

    let focused = state.focus == BeneficioField::Ativo;
    let (mark, color) = if state.form.ativo {
        ("[x] Ativo", Color::LightGreen)
    } else {
        ("[ ] Inativo", Color::DarkGray)
    };
    let toggle = Paragraph::new(Span::styled(mark, Style::default().fg(color))).block(
        Block::default()
            .title(BeneficioField::Ativo.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(field_border_style(focused, false)),
    );
    f.render_widget(toggle, chunks[3]);
}

fn render_text_field(f: &mut Frame, area: Rect, state: &FormState, field: BeneficioField) {
    let focused = state.focus == field;
    let value = state.form.text(field).unwrap_or_default();
    let error = state.form.visible_error(field);

    let mut lines = vec![Line::from(format!(
        "{}{}",
        value,
        if focused { "▏" } else { "" }
    ))];
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let required = matches!(field, BeneficioField::Nome | BeneficioField::Valor);
    let title = if required {
        format!("{} *", field)
    } else {
        field.to_string()
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(field_border_style(focused, error.is_some())),
    );
    f.render_widget(widget, area);
}
