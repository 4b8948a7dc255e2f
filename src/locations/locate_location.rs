use crate::config::ApiConfig;
use crate::locations::error::LocateLocationError;
use crate::types::location::Location;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::fmt;

const DIRECT_GEOCODING_PATH: &str = "/geo/1.0/direct";

/// City name with optional state and country code, as understood by the geocoding service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub country_code: Option<String>,
}

impl LocationQuery {
    /// Builds a query, trimming every part and dropping the empty ones.
    pub fn new(
        city: Option<String>,
        state_code: Option<String>,
        country_code: Option<String>,
    ) -> Self {
        fn clean(part: Option<String>) -> Option<String> {
            part.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())
        }
        Self {
            city: clean(city),
            state_code: clean(state_code),
            country_code: clean(country_code),
        }
    }

    /// The `q` parameter: `"{city},{state},{country}"` with absent parts left empty.
    pub fn to_query_string(&self) -> String {
        format!(
            "{},{},{}",
            self.city.as_deref().unwrap_or_default(),
            self.state_code.as_deref().unwrap_or_default(),
            self.country_code.as_deref().unwrap_or_default()
        )
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Resolves place names to coordinates with the OpenWeather direct geocoding service.
#[derive(Debug, Clone)]
pub struct LocationLocator {
    client: Client,
    config: ApiConfig,
}

impl LocationLocator {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Looks up the best match for `query`.
    ///
    /// Returns `Ok(None)` when the service knows no matching place.
    pub async fn locate(
        &self,
        query: &LocationQuery,
    ) -> Result<Option<Location>, LocateLocationError> {
        let url = self.config.endpoint(DIRECT_GEOCODING_PATH);
        let q = query.to_query_string();
        debug!("Looking up location '{}' at {}", q, url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&[
                ("appid", self.config.app_id.as_str()),
                ("limit", "1"),
                ("q", q.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LocateLocationError::NetworkRequest(url.clone(), e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Location lookup for '{}' failed with status {}", q, status);
            return Err(LocateLocationError::HttpStatus { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LocateLocationError::ResponseBody(url.clone(), e.without_url()))?;
        let locations: Vec<Location> = serde_json::from_str(&body)?;

        let location = locations.into_iter().next();
        match &location {
            Some(found) => info!(
                "Resolved '{}' to {} ({}, {})",
                q,
                found.display_name(),
                found.lat,
                found.lon
            ),
            None => info!("No location found for '{}'", q),
        }
        Ok(location)
    }
}
