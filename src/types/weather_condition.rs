//! Defines the `WeatherCondition` enum, mapping OpenWeather's numeric condition ids
//! to descriptive variants.

use std::fmt;

/// Represents the weather condition reported by OpenWeather for a forecast sample.
///
/// OpenWeather reports conditions as numeric ids in the `weather[].id` field, grouped
/// by hundreds (2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow, 7xx atmosphere,
/// 800 clear, 80x clouds). See the
/// [OpenWeather documentation](https://openweathermap.org/weather-conditions)
/// for the full list.
///
/// Convert an id with [`WeatherCondition::from_id`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum WeatherCondition {
    /// Ids 200-232: thunderstorm, with or without rain or drizzle.
    Thunderstorm,
    /// Ids 300-321: drizzle of any intensity.
    Drizzle,
    /// Id 500.
    LightRain,
    /// Id 501.
    Rain,
    /// Ids 502-504.
    HeavyRain,
    /// Id 511.
    FreezingRain,
    /// Ids 520-531.
    ShowerRain,
    /// Id 600.
    LightSnow,
    /// Id 601.
    Snow,
    /// Id 602.
    HeavySnow,
    /// Ids 611-616: sleet and rain-and-snow mixes.
    Sleet,
    /// Ids 620-622.
    ShowerSnow,
    /// Id 701.
    Mist,
    /// Id 711.
    Smoke,
    /// Id 721.
    Haze,
    /// Ids 731 and 761: sand or dust whirls, dust.
    Dust,
    /// Id 741.
    Fog,
    /// Id 751.
    Sand,
    /// Id 762: volcanic ash.
    Ash,
    /// Id 771.
    Squall,
    /// Id 781.
    Tornado,
    /// Id 800.
    Clear,
    /// Id 801: 11-25% clouds.
    FewClouds,
    /// Id 802: 25-50% clouds.
    ScatteredClouds,
    /// Id 803: 51-84% clouds.
    BrokenClouds,
    /// Id 804: 85-100% clouds.
    Overcast,
}

impl WeatherCondition {
    /// Attempts to convert an OpenWeather condition id into a `WeatherCondition` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCondition)` if `id` falls into a known condition range.
    /// * `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use owm_forecast::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_id(501), Some(WeatherCondition::Rain));
    /// assert_eq!(WeatherCondition::from_id(212), Some(WeatherCondition::Thunderstorm));
    /// assert_eq!(WeatherCondition::from_id(999), None);
    /// ```
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            200..=232 => Some(WeatherCondition::Thunderstorm),
            300..=321 => Some(WeatherCondition::Drizzle),
            500 => Some(WeatherCondition::LightRain),
            501 => Some(WeatherCondition::Rain),
            502..=504 => Some(WeatherCondition::HeavyRain),
            511 => Some(WeatherCondition::FreezingRain),
            520..=531 => Some(WeatherCondition::ShowerRain),
            600 => Some(WeatherCondition::LightSnow),
            601 => Some(WeatherCondition::Snow),
            602 => Some(WeatherCondition::HeavySnow),
            611..=616 => Some(WeatherCondition::Sleet),
            620..=622 => Some(WeatherCondition::ShowerSnow),
            701 => Some(WeatherCondition::Mist),
            711 => Some(WeatherCondition::Smoke),
            721 => Some(WeatherCondition::Haze),
            731 | 761 => Some(WeatherCondition::Dust),
            741 => Some(WeatherCondition::Fog),
            751 => Some(WeatherCondition::Sand),
            762 => Some(WeatherCondition::Ash),
            771 => Some(WeatherCondition::Squall),
            781 => Some(WeatherCondition::Tornado),
            800 => Some(WeatherCondition::Clear),
            801 => Some(WeatherCondition::FewClouds),
            802 => Some(WeatherCondition::ScatteredClouds),
            803 => Some(WeatherCondition::BrokenClouds),
            804 => Some(WeatherCondition::Overcast),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Drizzle => "drizzle",
            WeatherCondition::LightRain => "light rain",
            WeatherCondition::Rain => "rain",
            WeatherCondition::HeavyRain => "heavy rain",
            WeatherCondition::FreezingRain => "freezing rain",
            WeatherCondition::ShowerRain => "shower rain",
            WeatherCondition::LightSnow => "light snow",
            WeatherCondition::Snow => "snow",
            WeatherCondition::HeavySnow => "heavy snow",
            WeatherCondition::Sleet => "sleet",
            WeatherCondition::ShowerSnow => "shower snow",
            WeatherCondition::Mist => "mist",
            WeatherCondition::Smoke => "smoke",
            WeatherCondition::Haze => "haze",
            WeatherCondition::Dust => "dust",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Sand => "sand",
            WeatherCondition::Ash => "volcanic ash",
            WeatherCondition::Squall => "squalls",
            WeatherCondition::Tornado => "tornado",
            WeatherCondition::Clear => "clear sky",
            WeatherCondition::FewClouds => "few clouds",
            WeatherCondition::ScatteredClouds => "scattered clouds",
            WeatherCondition::BrokenClouds => "broken clouds",
            WeatherCondition::Overcast => "overcast clouds",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_boundaries() {
        assert_eq!(WeatherCondition::from_id(200), Some(WeatherCondition::Thunderstorm));
        assert_eq!(WeatherCondition::from_id(232), Some(WeatherCondition::Thunderstorm));
        assert_eq!(WeatherCondition::from_id(233), None);
        assert_eq!(WeatherCondition::from_id(531), Some(WeatherCondition::ShowerRain));
        assert_eq!(WeatherCondition::from_id(761), Some(WeatherCondition::Dust));
        assert_eq!(WeatherCondition::from_id(804), Some(WeatherCondition::Overcast));
        assert_eq!(WeatherCondition::from_id(0), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(WeatherCondition::BrokenClouds.to_string(), "broken clouds");
        assert_eq!(WeatherCondition::Ash.label(), "volcanic ash");
    }
}
