//! Groups a chronological stream of forecast samples into per-day buckets.
//!
//! Days are keyed by the date text of each sample (see [`Sample::date_key`]), not by
//! timezone-aware day boundaries. Samples are scanned once in input order and a
//! new bucket starts whenever the date text changes; a bucket is finalized the moment a
//! differing date or the end of the input is observed and is never revisited.

use crate::aggregation::day_summary::DaySummary;
use crate::types::sample::Sample;
use chrono::{DateTime, Utc};
use std::iter;

/// Consecutive samples sharing the same date text.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    date_text: String,
    samples: Vec<Sample>,
}

impl DayBucket {
    fn new(date_text: String) -> Self {
        Self {
            date_text,
            samples: Vec::new(),
        }
    }

    /// The shared date text of the bucket, e.g. `"2024-05-01"`.
    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Timestamp of the first sample, representing the whole day.
    pub fn representative_time(&self) -> Option<DateTime<Utc>> {
        self.samples.first().map(|s| s.timestamp)
    }

    pub fn summary(&self) -> Option<DaySummary> {
        DaySummary::from_samples(&self.samples)
    }
}

/// A finalized day: its bucket and the summary computed when the bucket was closed.
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    /// Timestamp of the first sample of the day.
    pub date: DateTime<Utc>,
    pub bucket: DayBucket,
    pub summary: DaySummary,
}

impl DayForecast {
    fn from_bucket(bucket: DayBucket) -> Option<Self> {
        Some(Self {
            date: bucket.representative_time()?,
            summary: bucket.summary()?,
            bucket,
        })
    }
}

/// Scans `samples` followed by an end-of-input sentinel (`None`) and hands every
/// finalized bucket to `emit`.
fn scan_days<I, F>(samples: I, mut emit: F)
where
    I: IntoIterator<Item = Sample>,
    F: FnMut(DayBucket),
{
    let mut current: Option<DayBucket> = None;

    for entry in samples.into_iter().map(Some).chain(iter::once(None)) {
        let key = entry.as_ref().map(Sample::date_key);
        if current.as_ref().map(DayBucket::date_text) != key {
            if let Some(finished) = current.take() {
                emit(finished);
            }
            current = key.map(|k| DayBucket::new(k.to_owned()));
        }

        if let (Some(bucket), Some(sample)) = (current.as_mut(), entry) {
            bucket.samples.push(sample);
        }
    }
}

/// Groups samples into day buckets, in first-seen order.
///
/// Concatenating the samples of the returned buckets reproduces the input exactly.
/// An empty input yields no buckets.
pub fn bucket_by_day<I>(samples: I) -> Vec<DayBucket>
where
    I: IntoIterator<Item = Sample>,
{
    let mut buckets = Vec::new();
    scan_days(samples, |bucket| buckets.push(bucket));
    buckets
}

/// Groups samples into days and summarizes every day as soon as it is finalized.
pub fn aggregate<I>(samples: I) -> Vec<DayForecast>
where
    I: IntoIterator<Item = Sample>,
{
    let mut days = Vec::new();
    scan_days(samples, |bucket| days.extend(DayForecast::from_bucket(bucket)));
    days
}
