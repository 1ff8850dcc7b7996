use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The API deployment the console talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on the developer machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL (scheme, host and port) for the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8080".to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid API URL '{0}': expected 'local' or an http(s):// URL")]
pub struct InvalidEnvironment(pub String);

impl FromStr for Environment {
    type Err = InvalidEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        let lower = trimmed.to_lowercase();
        let host = lower
            .strip_prefix("http://")
            .or_else(|| lower.strip_prefix("https://"));
        if host.is_some_and(|h| !h.trim_matches('/').is_empty()) {
            return Ok(Environment::Custom {
                api_url: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(InvalidEnvironment(s.to_string()))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_is_default() {
        assert_eq!(Environment::default(), Environment::Local);
        assert_eq!(Environment::Local.api_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_custom_url_strips_trailing_slash() {
        let env: Environment = "https://api.example.com/".parse().unwrap();
        assert_eq!(
            env,
            Environment::Custom {
                api_url: "https://api.example.com".to_string()
            }
        );
        assert_eq!(env.api_url(), "https://api.example.com");
    }

    #[test]
    fn test_parse_local_case_insensitive() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("ftp://example.com".parse::<Environment>().is_err());
        assert!("http://".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
