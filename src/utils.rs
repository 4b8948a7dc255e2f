use reqwest::StatusCode;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Factor from metres per second to kilometres per hour.
pub const MS_TO_KMH: f64 = 3.6;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn ms_to_kmh(speed: f64) -> f64 {
    speed * MS_TO_KMH
}

/// Returns the date portion of a forecast date-time text such as `"2024-05-01 12:00:00"`.
///
/// The date portion is everything before the first space. Text without a space is
/// used as a whole, so every sample always has a key to group by.
pub fn date_key(date_time_text: &str) -> &str {
    date_time_text
        .split_once(' ')
        .map_or(date_time_text, |(date, _)| date)
}

/// Arithmetic mean, `None` for an empty input.
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Formats a status as `"<code> <reason>"`, e.g. `"404 Not Found"`.
pub(crate) fn status_line(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
