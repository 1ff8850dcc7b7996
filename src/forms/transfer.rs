//! Balance transfer form
//!
//! Source and destination are picked among the active benefits fetched when
//! the view opened; the source balance used for the sufficiency check is the
//! one cached in that list.

use super::{FieldError, parse_amount, validate_amount};
use crate::models::{Beneficio, TransferRequest};
use rust_decimal::Decimal;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum TransferField {
    #[strum(to_string = "Benefício de Origem")]
    From,
    #[strum(to_string = "Benefício de Destino")]
    To,
    #[strum(to_string = "Valor a Transferir")]
    Amount,
}

impl TransferField {
    pub fn next(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::Amount,
            Self::Amount => Self::From,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::From => Self::Amount,
            Self::To => Self::From,
            Self::Amount => Self::To,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferForm {
    ativos: Vec<Beneficio>,
    from_id: Option<i64>,
    to_id: Option<i64>,
    pub amount: String,
    amount_touched: bool,
}

impl TransferForm {
    pub fn new(ativos: Vec<Beneficio>) -> Self {
        Self {
            ativos,
            ..Self::default()
        }
    }

    pub fn ativos(&self) -> &[Beneficio] {
        &self.ativos
    }

    pub fn from_id(&self) -> Option<i64> {
        self.from_id
    }

    pub fn to_id(&self) -> Option<i64> {
        self.to_id
    }

    /// Selects the source. A destination equal to the new source is cleared.
    pub fn select_source(&mut self, id: i64) {
        self.from_id = Some(id);
        if self.to_id == Some(id) {
            self.to_id = None;
        }
    }

    /// Selects the destination. Returns `false` (and changes nothing) when
    /// `id` is the current source.
    pub fn select_destination(&mut self, id: i64) -> bool {
        if self.from_id == Some(id) {
            return false;
        }
        self.to_id = Some(id);
        true
    }

    /// The cached record of the selected source.
    pub fn selected_source(&self) -> Option<&Beneficio> {
        let id = self.from_id?;
        self.ativos.iter().find(|b| b.id == id)
    }

    pub fn selected_destination(&self) -> Option<&Beneficio> {
        let id = self.to_id?;
        self.ativos.iter().find(|b| b.id == id)
    }

    /// Balance available for the transfer; zero while no source is chosen.
    pub fn source_balance(&self) -> Decimal {
        self.selected_source()
            .map(|b| b.valor)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn touch_amount(&mut self) {
        self.amount_touched = true;
    }

    pub fn is_amount_touched(&self) -> bool {
        self.amount_touched
    }

    /// The typed amount exceeds the cached source balance.
    pub fn insufficient_balance(&self) -> bool {
        match parse_amount(&self.amount) {
            Ok(Some(amount)) => amount > self.source_balance(),
            _ => false,
        }
    }

    pub fn field_error(&self, field: TransferField) -> Option<FieldError> {
        match field {
            TransferField::From => self
                .from_id
                .is_none()
                .then_some(FieldError::Required("Origem")),
            TransferField::To => {
                if self.to_id.is_none() {
                    Some(FieldError::Required("Destino"))
                } else if self.to_id == self.from_id {
                    Some(FieldError::SameBeneficio)
                } else {
                    None
                }
            }
            TransferField::Amount => match validate_amount(&self.amount, "Valor") {
                Err(e) => Some(e),
                Ok(_) if self.insufficient_balance() => Some(FieldError::InsufficientBalance),
                Ok(_) => None,
            },
        }
    }

    /// Amount errors only show once the field was touched; the balance
    /// warning shows as soon as it applies.
    pub fn visible_amount_error(&self) -> Option<FieldError> {
        if self.insufficient_balance() {
            return Some(FieldError::InsufficientBalance);
        }
        if self.amount_touched {
            self.field_error(TransferField::Amount)
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<TransferRequest, Vec<(TransferField, FieldError)>> {
        let errors: Vec<_> = [TransferField::From, TransferField::To, TransferField::Amount]
            .into_iter()
            .filter_map(|field| self.field_error(field).map(|e| (field, e)))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        match (self.from_id, self.to_id, validate_amount(&self.amount, "Valor")) {
            (Some(from_id), Some(to_id), Ok(amount)) => Ok(TransferRequest {
                from_id,
                to_id,
                amount,
            }),
            _ => Err(vec![(TransferField::Amount, FieldError::InvalidNumber)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beneficio(id: i64, nome: &str, valor: Decimal) -> Beneficio {
        Beneficio {
            id,
            nome: nome.to_string(),
            descricao: None,
            valor,
            ativo: Some(true),
            version: Some(0),
        }
    }

    fn form() -> TransferForm {
        TransferForm::new(vec![
            beneficio(1, "Alimentação", Decimal::new(10000, 2)),
            beneficio(2, "Transporte", Decimal::new(5000, 2)),
            beneficio(3, "Saúde", Decimal::ZERO),
        ])
    }

    #[test]
    fn test_selecting_source_equal_to_destination_clears_destination() {
        let mut form = form();
        form.select_source(1);
        assert!(form.select_destination(2));
        form.select_source(2);
        assert_eq!(form.from_id(), Some(2));
        assert_eq!(form.to_id(), None);
    }

    #[test]
    fn test_selecting_other_source_keeps_destination() {
        let mut form = form();
        form.select_source(1);
        form.select_destination(2);
        form.select_source(3);
        assert_eq!(form.to_id(), Some(2));
    }

    #[test]
    fn test_destination_cannot_equal_source() {
        let mut form = form();
        form.select_source(1);
        assert!(!form.select_destination(1));
        assert_eq!(form.to_id(), None);
    }

    #[test]
    fn test_amount_above_cached_balance_blocks_submit() {
        let mut form = form();
        form.select_source(2);
        form.select_destination(1);
        form.amount = "50,01".to_string();
        assert!(form.insufficient_balance());
        assert!(!form.can_submit());
        assert_eq!(
            form.visible_amount_error(),
            Some(FieldError::InsufficientBalance)
        );

        form.amount = "50".to_string();
        assert!(!form.insufficient_balance());
        assert!(form.can_submit());
    }

    #[test]
    fn test_any_amount_is_insufficient_without_source() {
        let mut form = form();
        form.amount = "1".to_string();
        assert_eq!(form.source_balance(), Decimal::ZERO);
        assert!(form.insufficient_balance());
    }

    #[test]
    fn test_blank_amount_is_not_insufficient_but_required() {
        let mut form = form();
        form.select_source(1);
        form.select_destination(2);
        assert!(!form.insufficient_balance());
        assert_eq!(form.visible_amount_error(), None);
        form.touch_amount();
        assert_eq!(
            form.visible_amount_error(),
            Some(FieldError::Required("Valor"))
        );
        assert!(!form.can_submit());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut form = form();
        form.select_source(1);
        form.select_destination(2);
        form.amount = "0".to_string();
        assert_eq!(
            form.field_error(TransferField::Amount),
            Some(FieldError::BelowMinimum)
        );
    }

    #[test]
    fn test_valid_form_builds_request() {
        let mut form = form();
        form.select_source(1);
        form.select_destination(3);
        form.amount = "100.00".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.from_id, 1);
        assert_eq!(request.to_id, 3);
        assert_eq!(request.amount, Decimal::new(100, 0));
    }

    #[test]
    fn test_missing_selections_reported() {
        let errors = form().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![TransferField::From, TransferField::To, TransferField::Amount]
        );
    }
}
