use crate::utils::status_line;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastDataError {
    #[error("Network request failed for {0}: {1}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP {}", status_line(.status))]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read forecast response from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    // Covers both invalid JSON and samples missing required readings
    #[error("Failed to parse forecast response: {0}")]
    JsonParse(#[from] serde_json::Error),
}
