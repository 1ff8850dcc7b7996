//! Session setup and initialization

use crate::api::BeneficioClient;
use crate::config::{Config, resolve_environment};
use crate::consts::cli_consts::API_URL_ENV_VAR;
use crate::environment::Environment;
use std::error::Error;
use std::path::Path;

/// Everything a command or the TUI needs to talk to the API
#[derive(Debug)]
pub struct SessionData {
    pub environment: Environment,
    pub client: BeneficioClient,
}

/// Loads the saved configuration from `config_path`, if any.
/// A missing file is not an error; an unreadable one is.
fn load_config(config_path: &Path) -> Result<Option<Config>, std::io::Error> {
    if !config_path.exists() {
        return Ok(None);
    }
    Config::load_from_file(config_path).map(Some)
}

/// Resolves the API URL (flag, then environment variable, then config file,
/// then the local default) and builds the HTTP client.
pub fn setup_session(
    cli_url: Option<&str>,
    config_path: &Path,
) -> Result<SessionData, Box<dyn Error>> {
    let config = load_config(config_path)?;
    let env_url = std::env::var(API_URL_ENV_VAR).ok();
    let environment = resolve_environment(cli_url, env_url.as_deref(), config.as_ref())?;
    log::debug!("Using API at {}", environment.api_url());

    let client = BeneficioClient::new(environment.clone())?;
    Ok(SessionData {
        environment,
        client,
    })
}
