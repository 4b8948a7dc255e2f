pub mod bounds;
pub mod day_charts;
pub mod mapper;
