//! Process configuration, read once at startup from the environment.
//!
//! Provider settings travel as an explicit [`ProviderConfig`] parameter into
//! the lookup functions so they can be pointed at fake endpoints in tests.

use std::fmt;

pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const GOOGLE_PLACES_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

const DEFAULT_PORT: u16 = 8000;

/// Everything the outbound lookup stages need: the provider key and the two
/// endpoint base URLs.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub geocode_url: String,
    pub places_url: String,
}

/// Full process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub providers: ProviderConfig,
    /// Exact frontend origin allowed by CORS. None means permissive.
    pub allowed_origin: Option<String>,
    pub host: String,
    pub port: u16,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => {
                write!(f, "GOOGLE_MAPS_API_KEY is not set")
            }
            Self::InvalidPort(v) => write!(f, "PORT is not a valid port number: '{}'", v),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `GOOGLE_MAPS_API_KEY` is required. `GEOCODE_BASE_URL` and
    /// `PLACES_BASE_URL` default to the Google endpoints and exist so tests
    /// and staging setups can substitute their own providers.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var("GOOGLE_MAPS_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

        let port = match std::env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            providers: ProviderConfig {
                api_key,
                geocode_url: env_or("GEOCODE_BASE_URL", GOOGLE_GEOCODE_URL),
                places_url: env_or("PLACES_BASE_URL", GOOGLE_PLACES_URL),
            },
            allowed_origin: std::env::var("FRONTEND_ORIGIN").ok(),
            host: env_or("HOST", "127.0.0.1"),
            port,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert!(format!("{}", ConfigError::MissingApiKey).contains("GOOGLE_MAPS_API_KEY"));
        assert!(format!("{}", ConfigError::InvalidPort("abc".into())).contains("abc"));
    }
}
