use crate::config::ConfigError;
use crate::forecasts::error::ForecastDataError;
use crate::locations::error::LocateLocationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    LocateLocation(#[from] LocateLocationError),

    #[error(transparent)]
    ForecastData(#[from] ForecastDataError),

    #[error("No location found for '{query}'")]
    LocationNotFound { query: String },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
