use crate::aggregation::day_bucket::DayForecast;
use crate::utils::ms_to_kmh;
use chrono::{DateTime, FixedOffset};

/// Display-ready cells of one overview table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    pub date: String,
    pub condition: String,
    pub temperature: String,
    pub rain: String,
    pub humidity: String,
    pub pressure: String,
    pub visibility: String,
    /// Strongest gust of the day (km/h).
    pub wind: String,
}

impl OverviewRow {
    pub const HEADERS: [&'static str; 8] = [
        "date",
        "condition",
        "temperature",
        "rain",
        "humidity",
        "pressure",
        "visibility",
        "wind",
    ];

    pub fn from_day(day: &DayForecast, offset: FixedOffset) -> Self {
        let summary = &day.summary;
        let visibility = match (summary.min_visibility, summary.max_visibility) {
            (Some(min), Some(max)) => format!("{}m - {}m", whole(min), whole(max)),
            _ => "-".to_string(),
        };

        Self {
            date: local_date_label(day.date.with_timezone(&offset)),
            condition: summary
                .condition
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
            temperature: format!(
                "{}° - {}°",
                whole(summary.min_temperature),
                whole(summary.max_temperature)
            ),
            rain: whole(summary.precipitation).to_string(),
            humidity: format!("{}%", whole(summary.mean_humidity)),
            pressure: whole(summary.mean_pressure).to_string(),
            visibility,
            wind: format!("{} km/h", whole(ms_to_kmh(summary.max_wind_gust))),
        }
    }

    pub fn cells(&self) -> [&str; 8] {
        [
            self.date.as_str(),
            self.condition.as_str(),
            self.temperature.as_str(),
            self.rain.as_str(),
            self.humidity.as_str(),
            self.pressure.as_str(),
            self.visibility.as_str(),
            self.wind.as_str(),
        ]
    }
}

/// Rounds to the nearest whole number for display; avoids printing `-0`.
pub(crate) fn whole(value: f64) -> i64 {
    value.round() as i64
}

fn local_date_label(date: DateTime<FixedOffset>) -> String {
    date.format("%a %Y-%m-%d").to_string()
}
