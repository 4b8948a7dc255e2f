use crate::charts::day_charts::{temperature_chart, wind_chart};
use crate::charts::mapper::{ChartGeometry, PlotArea};
use crate::types::sample::Sample;
use chrono::FixedOffset;

/// One row of the water table: moisture and precipitation of a 3-hour sample.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterRow {
    pub time: String,
    pub humidity: f64,
    pub rain: f64,
    pub snow: f64,
    /// Probability of precipitation in percent.
    pub precipitation_probability: Option<f64>,
    pub cloudiness: f64,
}

/// One row of the pressure table (hPa).
#[derive(Debug, Clone, PartialEq)]
pub struct PressureRow {
    pub time: String,
    pub pressure: f64,
    pub sea_level: Option<f64>,
    pub ground_level: Option<f64>,
}

/// Expanded view of a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub temperature_chart: Option<ChartGeometry>,
    pub wind_chart: Option<ChartGeometry>,
    pub water: Vec<WaterRow>,
    pub pressure: Vec<PressureRow>,
}

impl DayDetail {
    pub fn from_samples(samples: &[Sample], offset: FixedOffset, area: PlotArea) -> Self {
        let time = |s: &Sample| s.timestamp.with_timezone(&offset).format("%H:%M").to_string();

        Self {
            temperature_chart: temperature_chart(samples, area),
            wind_chart: wind_chart(samples, area),
            water: samples
                .iter()
                .map(|s| WaterRow {
                    time: time(s),
                    humidity: s.main.humidity,
                    rain: s.rain_3h(),
                    snow: s.snow_3h(),
                    precipitation_probability: s.precipitation_probability.map(|p| p * 100.0),
                    cloudiness: s.clouds.all,
                })
                .collect(),
            pressure: samples
                .iter()
                .map(|s| PressureRow {
                    time: time(s),
                    pressure: s.main.pressure,
                    sea_level: s.main.sea_level,
                    ground_level: s.main.ground_level,
                })
                .collect(),
        }
    }
}
