//! One-shot subcommands.
//!
//! Each command validates its input locally, issues at most the requests it
//! needs, prints the outcome and returns it for the caller.

pub mod beneficios;
pub mod transfer;

pub use beneficios::{BeneficioChanges, create, delete, list, show, summary, update};
pub use transfer::transfer;

use crate::api::error::ApiError;
use crate::forms::FieldError;
use crate::print_cmd_error;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Rejected before any request was sent.
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),

    /// The API call failed; `message` is what the user was shown.
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: ApiError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Prints each field error and wraps them.
    pub(crate) fn invalid<F: std::fmt::Display>(errors: &[(F, FieldError)]) -> Self {
        let messages: Vec<String> = errors
            .iter()
            .map(|(field, error)| {
                print_cmd_error!(&error.to_string(), &field.to_string());
                error.to_string()
            })
            .collect();
        CommandError::Invalid(messages)
    }

    /// Prints the server message (or `fallback`) and wraps the error.
    pub(crate) fn api(source: ApiError, fallback: &str) -> Self {
        let message = source.user_message(fallback);
        print_cmd_error!(&message, &source.to_string());
        CommandError::Api { message, source }
    }
}

/// Asks a yes/no question on stdout and reads the answer from `input`.
/// Anything other than `s`/`sim`/`y`/`yes` is a no.
pub fn confirm(question: &str, input: &mut impl BufRead) -> Result<bool, std::io::Error> {
    println!("{} [s/N]", question);
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    let answer = buf.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "s" | "sim" | "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm_accepts_portuguese_and_english_yes() {
        for answer in ["s\n", "SIM\n", "y\n", " yes \n"] {
            assert!(confirm("?", &mut Cursor::new(answer)).unwrap(), "{answer}");
        }
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        for answer in ["\n", "n\n", "talvez\n", ""] {
            assert!(!confirm("?", &mut Cursor::new(answer)).unwrap(), "{answer}");
        }
    }

    #[test]
    fn test_invalid_joins_messages() {
        let err = CommandError::invalid(&[
            ("Nome", FieldError::Required("Nome")),
            ("Valor", FieldError::BelowMinimum),
        ]);
        assert_eq!(
            err.to_string(),
            "Nome é obrigatório; Valor deve ser maior que zero"
        );
    }
}
