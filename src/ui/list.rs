//! Benefit list view
//!
//! Table of benefits with a server-side name search. Deletion goes through
//! the confirmation modal owned by the app.

use super::app::{Action, Route};
use crate::models::Beneficio;
use crate::pretty::{format_brl, status_label, truncate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Row, Table, TableState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub beneficios: Vec<Beneficio>,
    pub search: String,
    /// Keys go to the search box while set.
    pub searching: bool,
    pub selected: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows, keeping the selection in range.
    pub fn set_beneficios(&mut self, beneficios: Vec<Beneficio>) {
        self.beneficios = beneficios;
        self.selected = self.selected.min(self.beneficios.len().saturating_sub(1));
    }

    pub fn selected_beneficio(&self) -> Option<&Beneficio> {
        self.beneficios.get(self.selected)
    }

    pub fn captures_text(&self) -> bool {
        self.searching
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.searching {
            return match key.code {
                KeyCode::Char(c) => {
                    self.search.push(c);
                    Action::Search(self.search.clone())
                }
                KeyCode::Backspace => {
                    if self.search.pop().is_some() {
                        Action::Search(self.search.clone())
                    } else {
                        Action::None
                    }
                }
                KeyCode::Enter | KeyCode::Esc => {
                    self.searching = false;
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('/') => {
                self.searching = true;
                Action::None
            }
            KeyCode::Char('r') => Action::Search(self.search.clone()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.beneficios.len() {
                    self.selected += 1;
                }
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('e') => match self.selected_beneficio() {
                Some(b) => Action::Navigate(Route::Edit(b.id)),
                None => Action::None,
            },
            KeyCode::Char('x') | KeyCode::Delete => match self.selected_beneficio() {
                Some(b) => Action::ConfirmDelete {
                    id: b.id,
                    nome: b.nome.clone(),
                },
                None => Action::None,
            },
            KeyCode::Esc => Action::Navigate(Route::Dashboard),
            _ => Action::None,
        }
    }
}

pub const LIST_HINTS: &str =
    "[/] Buscar | [Enter] Editar | [X] Inativar | [N] Novo | [R] Recarregar | [D] Dashboard | [Q] Sair";

pub fn render_list(f: &mut Frame, area: Rect, state: &ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    let search_style = if state.searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_text = if state.search.is_empty() && !state.searching {
        Span::styled("Buscar por nome...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(format!(
            "{}{}",
            state.search,
            if state.searching { "▏" } else { "" }
        ))
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .title("BUSCA")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(search_style),
    );
    f.render_widget(search, chunks[0]);

    let block = Block::default()
        .title(format!("BENEFÍCIOS ({})", state.beneficios.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if state.beneficios.is_empty() {
        let empty = Paragraph::new("Nenhum benefício encontrado.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let header = Row::new(["ID", "Nome", "Descrição", "Valor", "Status"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = state
        .beneficios
        .iter()
        .map(|b| {
            let status_color = if b.is_active() {
                Color::LightGreen
            } else {
                Color::DarkGray
            };
            Row::new(vec![
                Line::from(format!("#{}", b.id)),
                Line::from(b.nome.clone()),
                Line::from(truncate(b.descricao.as_deref().unwrap_or("-"), 40)),
                Line::from(format_brl(b.valor)).alignment(Alignment::Right),
                Line::from(Span::styled(
                    status_label(b),
                    Style::default().fg(status_color),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, chunks[1], &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rust_decimal::Decimal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> ListState {
        let mut state = ListState::new();
        state.set_beneficios(
            (1..=3)
                .map(|id| Beneficio {
                    id,
                    nome: format!("Benefício {}", id),
                    descricao: None,
                    valor: Decimal::new(100, 0),
                    ativo: Some(true),
                    version: None,
                })
                .collect(),
        );
        state
    }

    #[test]
    fn test_typing_in_search_requeries() {
        let mut state = state();
        assert_eq!(state.handle_key(key(KeyCode::Char('/'))), Action::None);
        assert!(state.captures_text());
        assert_eq!(
            state.handle_key(key(KeyCode::Char('v'))),
            Action::Search("v".to_string())
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Backspace)),
            Action::Search(String::new())
        );
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), Action::None);
        state.handle_key(key(KeyCode::Esc));
        assert!(!state.captures_text());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = state();
        state.handle_key(key(KeyCode::Up));
        assert_eq!(state.selected, 0);
        for _ in 0..5 {
            state.handle_key(key(KeyCode::Down));
        }
        assert_eq!(state.selected, 2);
        state.set_beneficios(Vec::new());
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_edit_and_delete_target_selected_row() {
        let mut state = state();
        state.handle_key(key(KeyCode::Down));
        assert_eq!(
            state.handle_key(key(KeyCode::Enter)),
            Action::Navigate(Route::Edit(2))
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('x'))),
            Action::ConfirmDelete {
                id: 2,
                nome: "Benefício 2".to_string()
            }
        );
    }

    #[test]
    fn test_empty_list_has_no_row_actions() {
        let mut state = ListState::new();
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Action::None);
        assert_eq!(state.handle_key(key(KeyCode::Delete)), Action::None);
    }
}
