//! Wire types of the benefits API.
//!
//! Field names follow the API (`nome`, `descricao`, `valor`, `ativo`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A benefit record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficio {
    /// Server-assigned identifier.
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    /// Current balance.
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    /// `None` when the server sends `null`.
    #[serde(default)]
    pub ativo: Option<bool>,
    /// Optimistic-concurrency version, owned by the server.
    #[serde(default)]
    pub version: Option<i64>,
}

impl Beneficio {
    /// Whether the record is active. A missing flag counts as inactive.
    pub fn is_active(&self) -> bool {
        self.ativo.unwrap_or(false)
    }
}

/// Body of both `POST /` and `PUT /{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficioRequest {
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub ativo: bool,
}

/// Body of `POST /transferir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_id: i64,
    pub to_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_server_response() {
        let json = r#"{
            "id": 7,
            "nome": "Auxílio Alimentação",
            "descricao": null,
            "valor": 1250.75,
            "ativo": true,
            "version": 3
        }"#;
        let b: Beneficio = serde_json::from_str(json).unwrap();
        assert_eq!(b.id, 7);
        assert_eq!(b.descricao, None);
        assert_eq!(b.valor, Decimal::from_str("1250.75").unwrap());
        assert!(b.is_active());
        assert_eq!(b.version, Some(3));
    }

    #[test]
    fn test_missing_or_null_ativo_is_inactive() {
        let b: Beneficio =
            serde_json::from_str(r#"{"id": 1, "nome": "A", "valor": 10, "ativo": null}"#).unwrap();
        assert!(!b.is_active());
        let b: Beneficio = serde_json::from_str(r#"{"id": 1, "nome": "A", "valor": 10}"#).unwrap();
        assert!(!b.is_active());
    }

    #[test]
    fn test_transfer_request_uses_camel_case_and_numbers() {
        let req = TransferRequest {
            from_id: 1,
            to_id: 2,
            amount: Decimal::from_str("50.5").unwrap(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fromId"], 1);
        assert_eq!(value["toId"], 2);
        assert_eq!(value["amount"].as_f64(), Some(50.5));
    }

    #[test]
    fn test_request_omits_empty_description() {
        let req = BeneficioRequest {
            nome: "Vale Transporte".to_string(),
            descricao: None,
            valor: Decimal::new(30000, 2),
            ativo: true,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("descricao").is_none());
        assert_eq!(value["valor"].as_f64(), Some(300.0));
        assert_eq!(value["ativo"], true);
    }
}
