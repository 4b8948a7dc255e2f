//! Connection settings for the OpenWeather services.

use bon::Builder;
use serde::Deserialize;
use std::env;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_ORIGIN: &str = "https://api.openweathermap.org";

/// Environment variable holding the OpenWeather application id.
pub const APP_ID_VAR: &str = "OPENWEATHER_APP_ID";
/// Environment variable overriding [`DEFAULT_ORIGIN`].
pub const ORIGIN_VAR: &str = "OPENWEATHER_ORIGIN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingAppId(&'static str),

    #[error("Application id must not be empty")]
    EmptyAppId,

    #[error("Origin '{0}' must start with http:// or https://")]
    InvalidOrigin(String),
}

/// Origin and client identifier used for every request.
///
/// # Examples
///
/// ```
/// use owm_forecast::ApiConfig;
///
/// let config = ApiConfig::builder().app_id("my-app-id").build();
/// assert_eq!(config.origin, "https://api.openweathermap.org");
/// ```
#[derive(Clone, Deserialize, Builder)]
pub struct ApiConfig {
    /// Scheme and host of the service, without a trailing path.
    #[serde(default = "default_origin")]
    #[builder(into, default = default_origin())]
    pub origin: String,
    /// The OpenWeather application id (`appid`).
    #[builder(into)]
    pub app_id: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

impl ApiConfig {
    /// Reads the configuration from `OPENWEATHER_APP_ID` and, if set, `OPENWEATHER_ORIGIN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_id = env::var(APP_ID_VAR).map_err(|_| ConfigError::MissingAppId(APP_ID_VAR))?;
        let origin = env::var(ORIGIN_VAR).unwrap_or_else(|_| default_origin());
        let config = Self { origin, app_id };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        if !(self.origin.starts_with("http://") || self.origin.starts_with("https://")) {
            return Err(ConfigError::InvalidOrigin(self.origin.clone()));
        }
        Ok(())
    }

    /// Full URL of a service path such as `/data/2.5/forecast`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), path)
    }
}

// The application id is a credential and stays out of logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("origin", &self.origin)
            .field("app_id", &"<redacted>")
            .finish()
    }
}
