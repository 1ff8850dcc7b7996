//! Form models and field validation
//!
//! Pure state shared by the terminal views and the one-shot commands.

pub mod beneficio;
pub mod transfer;

pub use beneficio::{BeneficioField, BeneficioForm};
pub use transfer::{TransferField, TransferForm};

use crate::consts::cli_consts::{MIN_AMOUNT_CENTS, NOME_MAX_LEN};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// A field-level validation failure, worded for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} é obrigatório")]
    Required(&'static str),

    #[error("Máximo {0} caracteres")]
    MaxLength(usize),

    #[error("Valor inválido")]
    InvalidNumber,

    #[error("Valor deve ser maior que zero")]
    BelowMinimum,

    #[error("Origem e destino devem ser diferentes")]
    SameBeneficio,

    #[error("Saldo insuficiente para esta operação")]
    InsufficientBalance,
}

/// Smallest accepted amount (one cent).
pub fn min_amount() -> Decimal {
    Decimal::new(MIN_AMOUNT_CENTS, 2)
}

/// Parses a user-typed amount. Accepts `1234.56`, `1234,56` and an optional
/// `R$` prefix. Blank input is `Ok(None)`.
pub fn parse_amount(input: &str) -> Result<Option<Decimal>, FieldError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized = trimmed.replace(',', ".");
    Decimal::from_str(&normalized)
        .map(Some)
        .map_err(|_| FieldError::InvalidNumber)
}

/// Required amount of at least one cent.
pub fn validate_amount(input: &str, label: &'static str) -> Result<Decimal, FieldError> {
    let value = parse_amount(input)?.ok_or(FieldError::Required(label))?;
    if value < min_amount() {
        return Err(FieldError::BelowMinimum);
    }
    Ok(value)
}

/// Required name of at most [`NOME_MAX_LEN`] characters.
pub fn validate_nome(input: &str) -> Result<String, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required("Nome"));
    }
    if trimmed.chars().count() > NOME_MAX_LEN {
        return Err(FieldError::MaxLength(NOME_MAX_LEN));
    }
    Ok(trimmed.to_string())
}
