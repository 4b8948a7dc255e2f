//! Plain display data built from aggregated days: overview rows, per-day detail and
//! the status line. Nothing here knows about markup; renderers consume these values.

pub mod detail;
pub mod overview;
pub mod status;

use crate::aggregation::day_bucket::{aggregate, DayForecast};
use crate::charts::mapper::PlotArea;
use crate::types::forecast::{City, Forecast};
use crate::types::location::Location;
use chrono::{DateTime, FixedOffset};
use detail::DayDetail;
use overview::OverviewRow;

/// A day as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    /// First sample of the day, in the city's local time.
    pub date: DateTime<FixedOffset>,
    pub day: DayForecast,
    pub overview: OverviewRow,
    pub detail: DayDetail,
}

/// Everything needed to render one forecast: the resolved location, the echoed
/// city record and one entry per day.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub location: Location,
    pub city: City,
    pub days: Vec<DayView>,
}

impl ForecastView {
    pub fn build(location: Location, forecast: Forecast) -> Self {
        Self::build_with_area(location, forecast, PlotArea::default())
    }

    pub fn build_with_area(location: Location, forecast: Forecast, area: PlotArea) -> Self {
        let offset = forecast.city.utc_offset();
        let days = aggregate(forecast.samples)
            .into_iter()
            .map(|day| DayView {
                date: day.date.with_timezone(&offset),
                overview: OverviewRow::from_day(&day, offset),
                detail: DayDetail::from_samples(day.bucket.samples(), offset, area),
                day,
            })
            .collect();

        Self {
            location,
            city: forecast.city,
            days,
        }
    }

    pub fn overview_rows(&self) -> impl Iterator<Item = &OverviewRow> {
        self.days.iter().map(|d| &d.overview)
    }
}
