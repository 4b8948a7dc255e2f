use crate::config::ApiConfig;
use crate::forecasts::error::ForecastDataError;
use crate::types::forecast::Forecast;
use crate::weather_forecast::LatLon;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;

const FORECAST_PATH: &str = "/data/2.5/forecast";

/// Downloads 5 day / 3 hour forecasts.
#[derive(Debug, Clone)]
pub struct ForecastFetcher {
    client: Client,
    config: ApiConfig,
}

impl ForecastFetcher {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the forecast for `location`.
    ///
    /// `sample_limit` caps the number of 3-hour samples the service returns (`cnt`).
    pub async fn fetch(
        &self,
        location: LatLon,
        sample_limit: Option<u32>,
    ) -> Result<Forecast, ForecastDataError> {
        let url = self.config.endpoint(FORECAST_PATH);
        debug!("Fetching forecast for {:?} from {}", location, url);

        let mut query = vec![
            ("appid", self.config.app_id.clone()),
            ("lat", location.0.to_string()),
            ("lon", location.1.to_string()),
        ];
        if let Some(limit) = sample_limit {
            query.push(("cnt", limit.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&query)
            .send()
            .await
            .map_err(|e| ForecastDataError::NetworkRequest(url.clone(), e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Forecast request for {:?} failed with status {}", location, status);
            return Err(ForecastDataError::HttpStatus { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ForecastDataError::ResponseBody(url.clone(), e.without_url()))?;
        let forecast: Forecast = serde_json::from_str(&body)?;

        info!(
            "Fetched {} forecast samples for {} ({:?})",
            forecast.samples.len(),
            forecast.city.name,
            location
        );
        Ok(forecast)
    }
}
