//! Defines the response of the OpenWeather 5 day / 3 hour forecast service.

use crate::types::sample::Sample;
use crate::weather_forecast::LatLon;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// A forecast response: the ordered 3-hour samples plus the echoed city record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Samples in chronological order.
    #[serde(rename = "list")]
    pub samples: Vec<Sample>,
    pub city: City,
}

/// The city record the forecast service echoes back for the requested coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub coord: Coord,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub population: Option<u64>,
    /// Shift in seconds from UTC.
    #[serde(default)]
    pub timezone: i32,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub sunset: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl From<Coord> for LatLon {
    fn from(coord: Coord) -> Self {
        LatLon(coord.lat, coord.lon)
    }
}

impl City {
    /// The city's UTC offset, or UTC when the reported shift is out of range.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.timezone).unwrap_or_else(|| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_forecast_envelope() {
        let forecast: Forecast = serde_json::from_value(json!({
            "cod": "200",
            "message": 0,
            "cnt": 0,
            "list": [],
            "city": {
                "id": 2950159,
                "name": "Berlin",
                "coord": { "lat": 52.52, "lon": 13.405 },
                "country": "DE",
                "population": 1000000,
                "timezone": 7200,
                "sunrise": 1714534211,
                "sunset": 1714588420
            }
        }))
        .unwrap();

        assert!(forecast.samples.is_empty());
        assert_eq!(forecast.city.name, "Berlin");
        assert_eq!(LatLon::from(forecast.city.coord), LatLon(52.52, 13.405));
        assert_eq!(forecast.city.utc_offset().local_minus_utc(), 7200);
        assert_eq!(forecast.city.sunrise.map(|t| t.timestamp()), Some(1714534211));
    }

    #[test]
    fn test_out_of_range_timezone_falls_back_to_utc() {
        let city: City = serde_json::from_value(json!({
            "coord": { "lat": 0.0, "lon": 0.0 },
            "timezone": 999999
        }))
        .unwrap();
        assert_eq!(city.utc_offset().local_minus_utc(), 0);
    }
}
