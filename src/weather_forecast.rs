//! This module provides the main entry point of the crate: a client that resolves a
//! place name to coordinates, downloads the 5 day / 3 hour forecast for it and turns
//! the result into display data.

use crate::config::ApiConfig;
use crate::error::ForecastError;
use crate::forecasts::forecast_fetcher::ForecastFetcher;
use crate::locations::locate_location::{LocationLocator, LocationQuery};
use crate::types::forecast::Forecast;
use crate::types::location::Location;
use crate::view::ForecastView;
use bon::bon;
use log::info;
use reqwest::Client;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use owm_forecast::LatLon;
///
/// let berlin_center = LatLon(52.5200, 13.4050);
/// assert_eq!(berlin_center.0, 52.5200); // Latitude
/// assert_eq!(berlin_center.1, 13.4050); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The client for OpenWeather location lookups and forecasts.
///
/// Create one with [`WeatherForecast::new`] from an explicit [`ApiConfig`], or with
/// [`WeatherForecast::from_env`]. Every operation is a single sequential request
/// (or, for [`WeatherForecast::forecast_view`], two requests in strict order); there
/// are no retries, timeouts or caches.
///
/// # Examples
///
/// ```no_run
/// # use owm_forecast::{ApiConfig, ForecastError, WeatherForecast};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ForecastError> {
/// let client = WeatherForecast::new(ApiConfig::builder().app_id("my-app-id").build())?;
///
/// let view = client
///     .forecast_view()
///     .city("Berlin")
///     .country_code("DE")
///     .call()
///     .await?;
///
/// for row in view.overview_rows() {
///     println!("{} {}", row.date, row.temperature);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherForecast {
    locator: LocationLocator,
    fetcher: ForecastFetcher,
}

#[bon]
impl WeatherForecast {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Config`] if the configuration is invalid and
    /// [`ForecastError::HttpClient`] if the HTTP client cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ForecastError> {
        config.validate()?;
        let client = Client::builder()
            .build()
            .map_err(ForecastError::HttpClient)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a client that sends its requests through an existing `reqwest::Client`.
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self {
            locator: LocationLocator::new(client.clone(), config.clone()),
            fetcher: ForecastFetcher::new(client, config),
        }
    }

    /// Creates a client configured from the environment, see [`ApiConfig::from_env`].
    pub fn from_env() -> Result<Self, ForecastError> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Looks up the best matching place for a city name with optional state and
    /// country code.
    ///
    /// Finding no match is not an error: the result is `Ok(None)`.
    ///
    /// # Arguments
    ///
    /// * `.city(impl Into<String>)`: Optional. City name.
    /// * `.state_code(impl Into<String>)`: Optional. State code (US only on the service side).
    /// * `.country_code(impl Into<String>)`: Optional. ISO 3166 country code.
    #[builder]
    pub async fn find_location(
        &self,
        #[builder(into)] city: Option<String>,
        #[builder(into)] state_code: Option<String>,
        #[builder(into)] country_code: Option<String>,
    ) -> Result<Option<Location>, ForecastError> {
        let query = LocationQuery::new(city, state_code, country_code);
        Ok(self.locator.locate(&query).await?)
    }

    /// Fetches the forecast samples for a coordinate.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to fetch the forecast for.
    /// * `.sample_limit(u32)`: Optional. Maximum number of 3-hour samples to return.
    #[builder]
    pub async fn fetch_forecast(
        &self,
        location: LatLon,
        sample_limit: Option<u32>,
    ) -> Result<Forecast, ForecastError> {
        Ok(self.fetcher.fetch(location, sample_limit).await?)
    }

    /// Resolves a place, fetches its forecast and builds the overview and per-day
    /// detail view.
    ///
    /// The forecast request is only sent after the location lookup succeeded.
    ///
    /// # Errors
    ///
    /// * [`ForecastError::LocationNotFound`] if the lookup has no match.
    /// * [`ForecastError::LocateLocation`] or [`ForecastError::ForecastData`] for
    ///   network failures, non-success statuses and malformed responses.
    #[builder]
    pub async fn forecast_view(
        &self,
        #[builder(into)] city: Option<String>,
        #[builder(into)] state_code: Option<String>,
        #[builder(into)] country_code: Option<String>,
        sample_limit: Option<u32>,
    ) -> Result<ForecastView, ForecastError> {
        let query = LocationQuery::new(city, state_code, country_code);
        let location = self
            .locator
            .locate(&query)
            .await?
            .ok_or_else(|| ForecastError::LocationNotFound {
                query: query.to_string(),
            })?;

        let forecast = self
            .fetcher
            .fetch(location.lat_lon(), sample_limit)
            .await?;

        let view = ForecastView::build(location, forecast);
        info!(
            "Built forecast view for {} with {} days",
            view.location.display_name(),
            view.days.len()
        );
        Ok(view)
    }
}
