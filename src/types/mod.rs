pub mod forecast;
pub mod location;
pub mod sample;
pub mod weather_condition;
