use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{Beneficio, BeneficioRequest, TransferRequest};

pub(crate) mod client;
pub use client::BeneficioClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Operations exposed by the benefits REST API.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BeneficioApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// List every benefit, active or not.
    async fn find_all(&self) -> Result<Vec<Beneficio>, ApiError>;

    /// Fetch a single benefit by ID.
    async fn find_by_id(&self, id: i64) -> Result<Beneficio, ApiError>;

    /// List active benefits only.
    async fn find_ativos(&self) -> Result<Vec<Beneficio>, ApiError>;

    /// Benefits whose name contains `nome` (server-side, case-insensitive).
    async fn find_by_nome(&self, nome: &str) -> Result<Vec<Beneficio>, ApiError>;

    /// Creates a new benefit.
    async fn create(&self, request: &BeneficioRequest) -> Result<Beneficio, ApiError>;

    /// Replaces the editable fields of an existing benefit.
    async fn update(&self, id: i64, request: &BeneficioRequest) -> Result<Beneficio, ApiError>;

    /// Soft-deletes a benefit (the server marks it inactive).
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Moves `amount` from one benefit to another.
    async fn transfer(&self, request: &TransferRequest) -> Result<(), ApiError>;
}
