//! Defines the data structures returned by the OpenWeather direct geocoding service.

use crate::weather_forecast::LatLon;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A place resolved by the location lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Name of the found location (e.g., "Berlin").
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// ISO 3166 country code (e.g., "DE").
    #[serde(default)]
    pub country: String,
    /// State or region, if the service reported one.
    #[serde(default)]
    pub state: Option<String>,
    /// Names of the location in different languages, keyed by language code.
    #[serde(default)]
    pub local_names: Option<HashMap<String, String>>,
}

impl Location {
    pub fn lat_lon(&self) -> LatLon {
        LatLon(self.lat, self.lon)
    }

    /// Human readable name such as `"Berlin, DE"` or `"Springfield, Illinois, US"`.
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(state) = self.state.as_deref().filter(|s| !s.is_empty()) {
            parts.push(state);
        }
        if !self.country.is_empty() {
            parts.push(self.country.as_str());
        }
        parts.join(", ")
    }
}
