//! Listing, inspecting, creating, editing and inactivating benefits.

use super::{CommandError, confirm};
use crate::api::BeneficioApi;
use crate::forms::BeneficioForm;
use crate::models::Beneficio;
use crate::pretty::{beneficio_table, format_brl, status_label};
use crate::stats::Summary;
use crate::{print_cmd_info, print_cmd_success, print_cmd_warn};
use log::debug;
use std::io::BufRead;

/// Field overrides for `update`. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeneficioChanges {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub valor: Option<String>,
    pub ativo: Option<bool>,
}

impl BeneficioChanges {
    fn apply(self, form: &mut BeneficioForm) {
        if let Some(nome) = self.nome {
            form.nome = nome;
        }
        if let Some(descricao) = self.descricao {
            form.descricao = descricao;
        }
        if let Some(valor) = self.valor {
            form.valor = valor;
        }
        if let Some(ativo) = self.ativo {
            form.ativo = ativo;
        }
    }
}

/// Lists benefits. A non-blank `nome` uses the server-side search.
pub async fn list(
    api: &dyn BeneficioApi,
    nome: Option<&str>,
    active_only: bool,
) -> Result<Vec<Beneficio>, CommandError> {
    let term = nome.map(str::trim).filter(|n| !n.is_empty());
    let result = match (term, active_only) {
        (Some(term), _) => {
            print_cmd_info!("Buscando por nome", "\"{}\"", term);
            api.find_by_nome(term).await
        }
        (None, true) => api.find_ativos().await,
        (None, false) => api.find_all().await,
    };
    let mut beneficios = result.map_err(|e| CommandError::api(e, "Erro ao carregar benefícios"))?;
    if active_only {
        beneficios.retain(Beneficio::is_active);
    }
    debug!("Listed {} benefits", beneficios.len());
    println!("{}", beneficio_table(&beneficios));
    Ok(beneficios)
}

pub async fn show(api: &dyn BeneficioApi, id: i64) -> Result<Beneficio, CommandError> {
    let beneficio = api
        .find_by_id(id)
        .await
        .map_err(|e| CommandError::api(e, "Erro ao carregar benefício"))?;
    println!("ID:        #{}", beneficio.id);
    println!("Nome:      {}", beneficio.nome);
    println!(
        "Descrição: {}",
        beneficio.descricao.as_deref().unwrap_or("-")
    );
    println!("Valor:     {}", format_brl(beneficio.valor));
    println!("Status:    {}", status_label(&beneficio));
    if let Some(version) = beneficio.version {
        println!("Versão:    {}", version);
    }
    Ok(beneficio)
}

pub async fn create(
    api: &dyn BeneficioApi,
    form: BeneficioForm,
) -> Result<Beneficio, CommandError> {
    let request = form.validate().map_err(|e| CommandError::invalid(&e))?;
    let created = api
        .create(&request)
        .await
        .map_err(|e| CommandError::api(e, "Erro ao salvar benefício"))?;
    print_cmd_success!(
        "Benefício criado com sucesso!",
        "#{} {} ({})",
        created.id,
        created.nome,
        format_brl(created.valor)
    );
    Ok(created)
}

/// Loads the record, applies `changes` on top of it and saves it.
pub async fn update(
    api: &dyn BeneficioApi,
    id: i64,
    changes: BeneficioChanges,
) -> Result<Beneficio, CommandError> {
    let current = api
        .find_by_id(id)
        .await
        .map_err(|e| CommandError::api(e, "Erro ao carregar benefício"))?;
    let mut form = BeneficioForm::from_beneficio(&current);
    changes.apply(&mut form);
    let request = form.validate().map_err(|e| CommandError::invalid(&e))?;
    let updated = api
        .update(id, &request)
        .await
        .map_err(|e| CommandError::api(e, "Erro ao salvar benefício"))?;
    print_cmd_success!(
        "Benefício atualizado com sucesso!",
        "#{} {} ({})",
        updated.id,
        updated.nome,
        format_brl(updated.valor)
    );
    Ok(updated)
}

/// Inactivates a benefit. Without `assume_yes` the user is asked first.
/// Returns whether the request was sent.
pub async fn delete(
    api: &dyn BeneficioApi,
    id: i64,
    assume_yes: bool,
    input: &mut impl BufRead,
) -> Result<bool, CommandError> {
    if !assume_yes {
        let beneficio = api
            .find_by_id(id)
            .await
            .map_err(|e| CommandError::api(e, "Erro ao carregar benefício"))?;
        let question = format!(
            "Tem certeza que deseja inativar o benefício \"{}\"?",
            beneficio.nome
        );
        if !confirm(&question, input)? {
            print_cmd_warn!("Operação cancelada.", "");
            return Ok(false);
        }
    }
    api.delete(id)
        .await
        .map_err(|e| CommandError::api(e, "Erro ao inativar benefício"))?;
    print_cmd_success!("Benefício inativado.", "#{}", id);
    Ok(true)
}

pub async fn summary(api: &dyn BeneficioApi) -> Result<Summary, CommandError> {
    let beneficios = api
        .find_all()
        .await
        .map_err(|e| CommandError::api(e, "Erro ao carregar benefícios"))?;
    let summary = Summary::from_beneficios(&beneficios);
    println!("Total em Benefícios:  {}", format_brl(summary.total));
    println!("Benefícios Ativos:    {}", summary.active_count);
    println!("Média por Benefício:  {}", format_brl(summary.average));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBeneficioApi;
    use crate::api::error::ApiError;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn beneficio(id: i64, nome: &str, valor: Decimal, ativo: bool) -> Beneficio {
        Beneficio {
            id,
            nome: nome.to_string(),
            descricao: None,
            valor,
            ativo: Some(ativo),
            version: Some(0),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Http {
            status: 404,
            message: r#"{"message":"Benefício não encontrado: 9"}"#.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_blank_term_loads_everything() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![beneficio(1, "A", Decimal::ONE, true)]));
        api.expect_find_by_nome().never();

        let listed = list(&api, Some("   "), false).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_list_with_term_uses_search() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_by_nome()
            .withf(|nome| nome == "vale")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    beneficio(1, "Vale A", Decimal::ONE, true),
                    beneficio(2, "Vale B", Decimal::ONE, false),
                ])
            });

        let listed = list(&api, Some(" vale "), true).await.unwrap();
        assert_eq!(listed.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1]);
    }

    #[tokio::test]
    async fn test_list_active_only_uses_active_endpoint() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_ativos().times(1).returning(|| Ok(vec![]));
        api.expect_find_all().never();
        assert!(list(&api, None, true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_form_sends_nothing() {
        let mut api = MockBeneficioApi::new();
        api.expect_create().never();

        let mut form = BeneficioForm::new();
        form.nome = "Auxílio".to_string();
        form.valor = "0".to_string();
        let err = create(&api, form).await.unwrap_err();
        assert!(matches!(err, CommandError::Invalid(ref m) if m == &vec!["Valor deve ser maior que zero".to_string()]));
    }

    #[tokio::test]
    async fn test_create_sends_validated_request() {
        let mut api = MockBeneficioApi::new();
        api.expect_create()
            .withf(|req| req.nome == "Auxílio Creche" && req.valor == Decimal::new(30050, 2))
            .times(1)
            .returning(|req| Ok(beneficio(10, &req.nome, req.valor, req.ativo)));

        let mut form = BeneficioForm::new();
        form.nome = "Auxílio Creche".to_string();
        form.valor = "300,50".to_string();
        let created = create(&api, form).await.unwrap();
        assert_eq!(created.id, 10);
    }

    #[tokio::test]
    async fn test_create_surfaces_server_message() {
        let mut api = MockBeneficioApi::new();
        api.expect_create().returning(|_| {
            Err(ApiError::Http {
                status: 400,
                message: r#"{"message":"Nome é obrigatório"}"#.to_string(),
            })
        });

        let mut form = BeneficioForm::new();
        form.nome = "X".to_string();
        form.valor = "1".to_string();
        let err = create(&api, form).await.unwrap_err();
        assert_eq!(err.to_string(), "Nome é obrigatório");
    }

    #[tokio::test]
    async fn test_update_merges_changes_over_stored_record() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_by_id()
            .withf(|id| *id == 4)
            .returning(|_| Ok(beneficio(4, "Saúde", Decimal::new(200, 0), true)));
        api.expect_update()
            .withf(|id, req| {
                *id == 4 && req.nome == "Saúde" && req.valor == Decimal::new(250, 0) && !req.ativo
            })
            .times(1)
            .returning(|id, req| Ok(beneficio(id, &req.nome, req.valor, req.ativo)));

        let changes = BeneficioChanges {
            valor: Some("250".to_string()),
            ativo: Some(false),
            ..Default::default()
        };
        let updated = update(&api, 4, changes).await.unwrap();
        assert!(!updated.is_active());
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_server_message() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_by_id().returning(|_| Err(not_found()));
        api.expect_update().never();

        let err = update(&api, 9, BeneficioChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Benefício não encontrado: 9");
    }

    #[tokio::test]
    async fn test_delete_cancelled_when_not_confirmed() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_by_id()
            .returning(|id| Ok(beneficio(id, "Vale", Decimal::ONE, true)));
        api.expect_delete().never();

        let sent = delete(&api, 2, false, &mut Cursor::new("n\n")).await.unwrap();
        assert!(!sent);
    }

    #[tokio::test]
    async fn test_delete_confirmed_sends_request() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_by_id()
            .returning(|id| Ok(beneficio(id, "Vale", Decimal::ONE, true)));
        api.expect_delete()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(()));

        let sent = delete(&api, 2, false, &mut Cursor::new("s\n")).await.unwrap();
        assert!(sent);
    }

    #[tokio::test]
    async fn test_delete_assume_yes_skips_lookup() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_by_id().never();
        api.expect_delete().times(1).returning(|_| Ok(()));

        assert!(delete(&api, 5, true, &mut Cursor::new("")).await.unwrap());
    }

    #[tokio::test]
    async fn test_summary_over_active_records() {
        let mut api = MockBeneficioApi::new();
        api.expect_find_all().returning(|| {
            Ok(vec![
                beneficio(1, "A", Decimal::new(300, 0), true),
                beneficio(2, "B", Decimal::new(100, 0), true),
                beneficio(3, "C", Decimal::new(900, 0), false),
            ])
        });

        let summary = summary(&api).await.unwrap();
        assert_eq!(summary.total, Decimal::new(400, 0));
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.average, Decimal::new(200, 0));
    }
}
