pub mod day_bucket;
pub mod day_summary;
