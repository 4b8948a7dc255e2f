use crate::types::sample::{Clouds, MainReadings, Sample, Volume, Wind};
use chrono::NaiveDateTime;

/// Builds a sample at `date_time_text` with the given Kelvin temperature range.
pub(crate) fn sample(date_time_text: &str, temp_min: f64, temp_max: f64) -> Sample {
    let timestamp = NaiveDateTime::parse_from_str(date_time_text, "%Y-%m-%d %H:%M:%S")
        .expect("test date-time text must be well formed")
        .and_utc();
    Sample {
        timestamp,
        date_time_text: date_time_text.to_string(),
        main: MainReadings {
            temp: (temp_min + temp_max) / 2.0,
            feels_like: None,
            temp_min,
            temp_max,
            pressure: 1013.0,
            sea_level: Some(1013.0),
            ground_level: Some(1009.0),
            humidity: 70.0,
        },
        weather: Vec::new(),
        clouds: Clouds { all: 40.0 },
        wind: Wind {
            speed: 3.0,
            deg: Some(180.0),
            gust: Some(5.0),
        },
        visibility: Some(10000.0),
        precipitation_probability: None,
        rain: None,
        snow: None,
    }
}

pub(crate) fn with_rain(mut sample: Sample, millimetres: f64) -> Sample {
    sample.rain = Some(Volume {
        three_hours: millimetres,
    });
    sample
}
