//! Balance transfer between two active benefits.

use super::CommandError;
use crate::api::BeneficioApi;
use crate::forms::{FieldError, TransferField, TransferForm, validate_amount};
use crate::pretty::format_brl;
use crate::{print_cmd_error, print_cmd_success};
use log::debug;

/// Moves `amount` from `from_id` to `to_id`.
///
/// Equal ids and malformed amounts are rejected before anything is fetched.
/// Both ends must be among the active benefits, and the amount must fit the
/// source balance as listed by the server.
pub async fn transfer(
    api: &dyn BeneficioApi,
    from_id: i64,
    to_id: i64,
    amount: &str,
) -> Result<(), CommandError> {
    let mut early = Vec::new();
    if from_id == to_id {
        early.push((TransferField::To, FieldError::SameBeneficio));
    }
    if let Err(e) = validate_amount(amount, "Valor") {
        early.push((TransferField::Amount, e));
    }
    if !early.is_empty() {
        return Err(CommandError::invalid(&early));
    }

    let ativos = api
        .find_ativos()
        .await
        .map_err(|e| CommandError::api(e, "Erro ao carregar benefícios"))?;
    debug!("Loaded {} active benefits for transfer", ativos.len());

    let mut form = TransferForm::new(ativos);
    let mut missing = Vec::new();
    for (label, id) in [("origem", from_id), ("destino", to_id)] {
        if !form.ativos().iter().any(|b| b.id == id) {
            let message = format!("Benefício de {} não encontrado entre os ativos: #{}", label, id);
            print_cmd_error!(&message);
            missing.push(message);
        }
    }
    if !missing.is_empty() {
        return Err(CommandError::Invalid(missing));
    }

    form.select_source(from_id);
    form.select_destination(to_id);
    form.amount = amount.to_string();
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            if form.insufficient_balance() {
                print_cmd_error!(
                    "Saldo disponível",
                    &format_brl(form.source_balance())
                );
            }
            return Err(CommandError::invalid(&errors));
        }
    };

    api.transfer(&request)
        .await
        .map_err(|e| CommandError::api(e, "Erro ao realizar transferência"))?;
    print_cmd_success!(
        "Transferência realizada com sucesso!",
        "{} de #{} para #{}",
        format_brl(request.amount),
        request.from_id,
        request.to_id
    );
    Ok(())
}
