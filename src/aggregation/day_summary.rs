use crate::types::sample::Sample;
use crate::types::weather_condition::WeatherCondition;
use crate::utils::{kelvin_to_celsius, mean};
use ordered_float::OrderedFloat;

/// Aggregate statistics over the samples of one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    /// Lowest `temp_min` of the day (°C).
    pub min_temperature: f64,
    /// Highest `temp_max` of the day (°C).
    pub max_temperature: f64,
    /// Summed 3-hour rain volumes (mm). Samples without rain count as 0.
    pub precipitation: f64,
    /// Summed 3-hour snow volumes (mm). Samples without snow count as 0.
    pub snow: f64,
    /// Mean relative humidity (%).
    pub mean_humidity: f64,
    /// Mean pressure (hPa).
    pub mean_pressure: f64,
    /// Lowest reported visibility (m), `None` if no sample reported one.
    pub min_visibility: Option<f64>,
    /// Highest reported visibility (m), `None` if no sample reported one.
    pub max_visibility: Option<f64>,
    /// Highest wind gust (m/s).
    pub max_wind_gust: f64,
    /// Most frequent condition of the day. Ties go to the condition seen first.
    pub condition: Option<WeatherCondition>,
}

impl DaySummary {
    /// Computes the summary of `samples`, or `None` when there are no samples.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let min_temperature = samples
            .iter()
            .map(|s| OrderedFloat(s.main.temp_min))
            .min()?
            .into_inner();
        let max_temperature = samples
            .iter()
            .map(|s| OrderedFloat(s.main.temp_max))
            .max()?
            .into_inner();
        let max_wind_gust = samples
            .iter()
            .map(|s| OrderedFloat(s.wind_gust()))
            .max()?
            .into_inner();

        let visibilities = || samples.iter().filter_map(|s| s.visibility).map(OrderedFloat);

        Some(Self {
            min_temperature: kelvin_to_celsius(min_temperature),
            max_temperature: kelvin_to_celsius(max_temperature),
            precipitation: samples.iter().map(Sample::rain_3h).sum(),
            snow: samples.iter().map(Sample::snow_3h).sum(),
            mean_humidity: mean(samples.iter().map(|s| s.main.humidity))?,
            mean_pressure: mean(samples.iter().map(|s| s.main.pressure))?,
            min_visibility: visibilities().min().map(OrderedFloat::into_inner),
            max_visibility: visibilities().max().map(OrderedFloat::into_inner),
            max_wind_gust,
            condition: dominant_condition(samples),
        })
    }
}

fn dominant_condition(samples: &[Sample]) -> Option<WeatherCondition> {
    // (condition, count) in first-seen order
    let mut counts: Vec<(WeatherCondition, usize)> = Vec::new();
    for condition in samples.iter().filter_map(Sample::condition) {
        match counts.iter_mut().find(|(c, _)| *c == condition) {
            Some((_, count)) => *count += 1,
            None => counts.push((condition, 1)),
        }
    }

    let mut best: Option<(WeatherCondition, usize)> = None;
    for (condition, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((condition, count));
        }
    }
    best.map(|(condition, _)| condition)
}
