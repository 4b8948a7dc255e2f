//! Defines the data structures of a single OpenWeather 3-hour forecast sample,
//! mirroring the JSON layout of the `list` entries returned by `/data/2.5/forecast`.

use crate::types::weather_condition::WeatherCondition;
use crate::utils::{date_key, kelvin_to_celsius, ms_to_kmh};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One weather observation at a 3-hour timestamp.
///
/// Temperatures are reported in Kelvin, wind speeds in m/s, pressures in hPa,
/// visibility in metres and precipitation volumes in mm. Use the accessor methods
/// for converted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time of the forecasted data.
    #[serde(rename = "dt", with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Date-time text as reported by the service, e.g. `"2024-05-01 12:00:00"`.
    #[serde(rename = "dt_txt")]
    pub date_time_text: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionReport>,
    #[serde(default)]
    pub clouds: Clouds,
    #[serde(default)]
    pub wind: Wind,
    /// Visibility in metres, capped at 10 km by the service.
    #[serde(default)]
    pub visibility: Option<f64>,
    /// Probability of precipitation, 0.0 to 1.0.
    #[serde(rename = "pop", default)]
    pub precipitation_probability: Option<f64>,
    #[serde(default)]
    pub rain: Option<Volume>,
    #[serde(default)]
    pub snow: Option<Volume>,
}

/// Temperature, pressure and humidity readings of a [`Sample`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Mean temperature (K).
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Pressure (hPa).
    pub pressure: f64,
    #[serde(default)]
    pub sea_level: Option<f64>,
    #[serde(rename = "grnd_level", default)]
    pub ground_level: Option<f64>,
    /// Relative humidity (%).
    pub humidity: f64,
}

/// One entry of the `weather` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionReport {
    pub id: u32,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    /// Cloudiness (%).
    #[serde(default)]
    pub all: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed (m/s).
    #[serde(default)]
    pub speed: f64,
    /// Wind direction (degrees, meteorological).
    #[serde(default)]
    pub deg: Option<f64>,
    /// Wind gust (m/s).
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Precipitation volume over the last 3 hours (mm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(rename = "3h", default)]
    pub three_hours: f64,
}

impl Sample {
    /// The calendar-date part of [`Sample::date_time_text`], used to group samples into days.
    pub fn date_key(&self) -> &str {
        date_key(&self.date_time_text)
    }

    pub fn temp_celsius(&self) -> f64 {
        kelvin_to_celsius(self.main.temp)
    }

    pub fn temp_min_celsius(&self) -> f64 {
        kelvin_to_celsius(self.main.temp_min)
    }

    pub fn temp_max_celsius(&self) -> f64 {
        kelvin_to_celsius(self.main.temp_max)
    }

    /// Rain volume over the last 3 hours, `0.0` when the service reported none.
    pub fn rain_3h(&self) -> f64 {
        self.rain.map_or(0.0, |v| v.three_hours)
    }

    /// Snow volume over the last 3 hours, `0.0` when the service reported none.
    pub fn snow_3h(&self) -> f64 {
        self.snow.map_or(0.0, |v| v.three_hours)
    }

    /// Wind gust in m/s, falling back to the wind speed when no gust was reported.
    pub fn wind_gust(&self) -> f64 {
        self.wind.gust.unwrap_or(self.wind.speed)
    }

    pub fn wind_speed_kmh(&self) -> f64 {
        ms_to_kmh(self.wind.speed)
    }

    pub fn wind_gust_kmh(&self) -> f64 {
        ms_to_kmh(self.wind_gust())
    }

    /// The primary weather condition of this sample, if the reported id is known.
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.weather
            .first()
            .and_then(|report| WeatherCondition::from_id(report.id))
    }
}
