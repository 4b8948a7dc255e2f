use crate::charts::bounds::ChartBounds;
use crate::charts::mapper::{ChartGeometry, ChartMapper, PlotArea};
use crate::types::sample::Sample;

/// Temperature chart of one day in °C.
///
/// The line follows the mean temperature; the band spans `temp_max` (top edge) and
/// `temp_min` (bottom edge). Bounds are `floor(min temp_min)` to `ceil(max temp_max)`.
/// Returns `None` for an empty day.
pub fn temperature_chart(samples: &[Sample], area: PlotArea) -> Option<ChartGeometry> {
    let line: Vec<f64> = samples.iter().map(Sample::temp_celsius).collect();
    let maxima: Vec<f64> = samples.iter().map(Sample::temp_max_celsius).collect();
    let minima: Vec<f64> = samples.iter().map(Sample::temp_min_celsius).collect();

    let bounds = ChartBounds::from_extremes(minima.iter().copied(), maxima.iter().copied())?;
    let mapper = ChartMapper::new(area, bounds, samples.len());
    Some(mapper.geometry(&line, &maxima, &minima))
}

/// Wind chart of one day in km/h.
///
/// The line follows the wind speed; the band spans gust (top edge) and speed (bottom
/// edge). Bounds are `0` to `ceil(max gust)`. Returns `None` for an empty day.
pub fn wind_chart(samples: &[Sample], area: PlotArea) -> Option<ChartGeometry> {
    let speeds: Vec<f64> = samples.iter().map(Sample::wind_speed_kmh).collect();
    let gusts: Vec<f64> = samples.iter().map(Sample::wind_gust_kmh).collect();

    let bounds = ChartBounds::from_extremes([0.0], gusts.iter().copied())?;
    let mapper = ChartMapper::new(area, bounds, samples.len());
    Some(mapper.geometry(&speeds, &gusts, &speeds))
}
