mod aggregation;
mod charts;
mod config;
mod error;
mod forecasts;
mod locations;
mod types;
mod utils;
mod view;
mod weather_forecast;

#[cfg(test)]
mod test_utils;

pub use config::{ApiConfig, ConfigError, APP_ID_VAR, DEFAULT_ORIGIN, ORIGIN_VAR};
pub use error::ForecastError;
pub use weather_forecast::*;

pub use aggregation::day_bucket::{aggregate, bucket_by_day, DayBucket, DayForecast};
pub use aggregation::day_summary::DaySummary;

pub use charts::bounds::ChartBounds;
pub use charts::day_charts::{temperature_chart, wind_chart};
pub use charts::mapper::{
    svg_points, ChartGeometry, ChartMapper, PlotArea, Point, PLOT_HEIGHT, PLOT_ORIGIN_X,
    PLOT_ORIGIN_Y, PLOT_WIDTH,
};

pub use types::forecast::{City, Coord, Forecast};
pub use types::location::Location;
pub use types::sample::{ConditionReport, Clouds, MainReadings, Sample, Volume, Wind};
pub use types::weather_condition::WeatherCondition;

pub use utils::{date_key, kelvin_to_celsius, ms_to_kmh, KELVIN_OFFSET, MS_TO_KMH};

pub use view::detail::{DayDetail, PressureRow, WaterRow};
pub use view::overview::OverviewRow;
pub use view::status::{StatusKind, StatusMessage};
pub use view::{DayView, ForecastView};

pub use forecasts::error::ForecastDataError;
pub use forecasts::forecast_fetcher::ForecastFetcher;
pub use locations::error::LocateLocationError;
pub use locations::locate_location::{LocationLocator, LocationQuery};
