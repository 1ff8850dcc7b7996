//! BenefitX API Client
//!
//! A JSON-over-HTTP client for the benefits resource of the BenefitX backend.

use crate::api::BeneficioApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{API_BASE_PATH, http};
use crate::environment::Environment;
use crate::models::{Beneficio, BeneficioRequest, TransferRequest};
use log::debug;
use reqwest::{Client, ClientBuilder, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("benefitx/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BeneficioClient {
    client: Client,
    environment: Environment,
}

impl BeneficioClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    /// Joins the API URL, the resource path and `endpoint` (which is either
    /// empty or starts with `/`).
    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.environment.api_url().trim_end_matches('/'),
            API_BASE_PATH,
            endpoint
        )
    }

    fn search_endpoint(nome: &str) -> String {
        format!("/buscar?nome={}", urlencoding::encode(nome))
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.build_url(endpoint);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        Self::handle_response_status(response).await
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.send::<()>(Method::GET, endpoint, None).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn json_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(method, endpoint, Some(body)).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn request_no_response<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.send(method, endpoint, body).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl BeneficioApi for BeneficioClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn find_all(&self) -> Result<Vec<Beneficio>, ApiError> {
        self.get_request("").await
    }

    async fn find_by_id(&self, id: i64) -> Result<Beneficio, ApiError> {
        self.get_request(&format!("/{}", id)).await
    }

    async fn find_ativos(&self) -> Result<Vec<Beneficio>, ApiError> {
        self.get_request("/ativos").await
    }

    async fn find_by_nome(&self, nome: &str) -> Result<Vec<Beneficio>, ApiError> {
        self.get_request(&Self::search_endpoint(nome)).await
    }

    async fn create(&self, request: &BeneficioRequest) -> Result<Beneficio, ApiError> {
        self.json_request(Method::POST, "", request).await
    }

    async fn update(&self, id: i64, request: &BeneficioRequest) -> Result<Beneficio, ApiError> {
        self.json_request(Method::PUT, &format!("/{}", id), request)
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.request_no_response::<()>(Method::DELETE, &format!("/{}", id), None)
            .await
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<(), ApiError> {
        self.request_no_response(Method::POST, "/transferir", Some(request))
            .await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> BeneficioClient {
        BeneficioClient::new(url.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_build_url_joins_base_path() {
        let client = client_for("http://api.example.com:9000/");
        assert_eq!(
            client.build_url(""),
            "http://api.example.com:9000/api/v1/beneficios"
        );
        assert_eq!(
            client.build_url("/42"),
            "http://api.example.com:9000/api/v1/beneficios/42"
        );
        assert_eq!(
            client.build_url("/transferir"),
            "http://api.example.com:9000/api/v1/beneficios/transferir"
        );
    }

    #[test]
    fn test_local_environment_url() {
        let client = BeneficioClient::new(Environment::Local).unwrap();
        assert_eq!(
            client.build_url("/ativos"),
            "http://localhost:8080/api/v1/beneficios/ativos"
        );
    }

    #[test]
    fn test_search_endpoint_encodes_name() {
        assert_eq!(
            BeneficioClient::search_endpoint("Vale Refeição & Cia"),
            "/buscar?nome=Vale%20Refei%C3%A7%C3%A3o%20%26%20Cia"
        );
    }

    #[tokio::test]
    /// An unreachable server surfaces as a transport error, not a panic.
    async fn test_unreachable_server_is_reqwest_error() {
        let client = client_for("http://127.0.0.1:1");
        let err = client.find_all().await.unwrap_err();
        assert!(matches!(err, ApiError::Reqwest(_)));
        assert_eq!(err.user_message("Erro"), "Erro");
    }
}
