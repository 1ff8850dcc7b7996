//! Create/edit form for a single benefit

use super::{FieldError, validate_amount, validate_nome};
use crate::models::{Beneficio, BeneficioRequest};
use std::collections::HashSet;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum BeneficioField {
    #[strum(to_string = "Nome")]
    Nome,
    #[strum(to_string = "Valor (R$)")]
    Valor,
    #[strum(to_string = "Descrição")]
    Descricao,
    #[strum(to_string = "Benefício Ativo")]
    Ativo,
}

impl BeneficioField {
    pub fn next(self) -> Self {
        match self {
            Self::Nome => Self::Valor,
            Self::Valor => Self::Descricao,
            Self::Descricao => Self::Ativo,
            Self::Ativo => Self::Nome,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Nome => Self::Ativo,
            Self::Valor => Self::Nome,
            Self::Descricao => Self::Valor,
            Self::Ativo => Self::Descricao,
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Self::Ativo)
    }
}

/// Raw form input. Values stay as typed until [`BeneficioForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeneficioForm {
    pub nome: String,
    pub descricao: String,
    pub valor: String,
    pub ativo: bool,
    touched: HashSet<BeneficioField>,
}

impl Default for BeneficioForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            descricao: String::new(),
            valor: String::new(),
            ativo: true,
            touched: HashSet::new(),
        }
    }
}

impl BeneficioForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record (edit mode).
    pub fn from_beneficio(beneficio: &Beneficio) -> Self {
        Self {
            nome: beneficio.nome.clone(),
            descricao: beneficio.descricao.clone().unwrap_or_default(),
            valor: beneficio.valor.normalize().to_string(),
            ativo: beneficio.is_active(),
            touched: HashSet::new(),
        }
    }

    pub fn text_mut(&mut self, field: BeneficioField) -> Option<&mut String> {
        match field {
            BeneficioField::Nome => Some(&mut self.nome),
            BeneficioField::Valor => Some(&mut self.valor),
            BeneficioField::Descricao => Some(&mut self.descricao),
            BeneficioField::Ativo => None,
        }
    }

    pub fn text(&self, field: BeneficioField) -> Option<&str> {
        match field {
            BeneficioField::Nome => Some(&self.nome),
            BeneficioField::Valor => Some(&self.valor),
            BeneficioField::Descricao => Some(&self.descricao),
            BeneficioField::Ativo => None,
        }
    }

    pub fn touch(&mut self, field: BeneficioField) {
        self.touched.insert(field);
    }

    /// Marks every field touched so that all errors become visible.
    pub fn touch_all(&mut self) {
        self.touched.extend([
            BeneficioField::Nome,
            BeneficioField::Valor,
            BeneficioField::Descricao,
            BeneficioField::Ativo,
        ]);
    }

    pub fn is_touched(&self, field: BeneficioField) -> bool {
        self.touched.contains(&field)
    }

    /// Validation error of a single field, regardless of touched state.
    pub fn field_error(&self, field: BeneficioField) -> Option<FieldError> {
        match field {
            BeneficioField::Nome => validate_nome(&self.nome).err(),
            BeneficioField::Valor => validate_amount(&self.valor, "Valor").err(),
            BeneficioField::Descricao | BeneficioField::Ativo => None,
        }
    }

    /// Error to display next to a field: only once it has been touched.
    pub fn visible_error(&self, field: BeneficioField) -> Option<FieldError> {
        if self.is_touched(field) {
            self.field_error(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds the request body, or every field error found.
    pub fn validate(&self) -> Result<BeneficioRequest, Vec<(BeneficioField, FieldError)>> {
        let nome = validate_nome(&self.nome);
        let valor = validate_amount(&self.valor, "Valor");
        match (nome, valor) {
            (Ok(nome), Ok(valor)) => {
                let descricao = self.descricao.trim();
                Ok(BeneficioRequest {
                    nome,
                    descricao: (!descricao.is_empty()).then(|| descricao.to_string()),
                    valor,
                    ativo: self.ativo,
                })
            }
            (nome, valor) => {
                let mut errors = Vec::new();
                if let Err(e) = nome {
                    errors.push((BeneficioField::Nome, e));
                }
                if let Err(e) = valor {
                    errors.push((BeneficioField::Valor, e));
                }
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn filled() -> BeneficioForm {
        let mut form = BeneficioForm::new();
        form.nome = "Auxílio Alimentação".to_string();
        form.valor = "450,90".to_string();
        form
    }

    #[test]
    fn test_new_form_is_active_and_invalid() {
        let form = BeneficioForm::new();
        assert!(form.ativo);
        assert!(!form.is_valid());
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                (BeneficioField::Nome, FieldError::Required("Nome")),
                (BeneficioField::Valor, FieldError::Required("Valor")),
            ]
        );
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.nome, "Auxílio Alimentação");
        assert_eq!(request.valor, Decimal::new(45090, 2));
        assert_eq!(request.descricao, None);
        assert!(request.ativo);
    }

    #[test]
    fn test_description_is_trimmed_and_kept() {
        let mut form = filled();
        form.descricao = "  Cartão mensal  ".to_string();
        form.ativo = false;
        let request = form.validate().unwrap();
        assert_eq!(request.descricao.as_deref(), Some("Cartão mensal"));
        assert!(!request.ativo);
    }

    #[test]
    fn test_zero_amount_blocks_submission() {
        let mut form = filled();
        form.valor = "0".to_string();
        assert!(!form.is_valid());
        assert_eq!(
            form.field_error(BeneficioField::Valor),
            Some(FieldError::BelowMinimum)
        );
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = BeneficioForm::new();
        assert_eq!(form.visible_error(BeneficioField::Nome), None);
        form.touch(BeneficioField::Nome);
        assert_eq!(
            form.visible_error(BeneficioField::Nome),
            Some(FieldError::Required("Nome"))
        );
        assert_eq!(form.visible_error(BeneficioField::Valor), None);
        form.touch_all();
        assert!(form.visible_error(BeneficioField::Valor).is_some());
    }

    #[test]
    fn test_from_beneficio_patches_fields() {
        let beneficio = Beneficio {
            id: 3,
            nome: "Vale Cultura".to_string(),
            descricao: Some("Livros".to_string()),
            valor: Decimal::new(5000, 2),
            ativo: Some(false),
            version: Some(1),
        };
        let form = BeneficioForm::from_beneficio(&beneficio);
        assert_eq!(form.nome, "Vale Cultura");
        assert_eq!(form.descricao, "Livros");
        assert_eq!(form.valor, "50");
        assert!(!form.ativo);
        assert!(form.is_valid());
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = BeneficioField::Nome;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, BeneficioField::Nome);
        assert_eq!(BeneficioField::Nome.previous(), BeneficioField::Ativo);
    }
}
