//! Weighted buckets keyed by cumulative probability thresholds

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;

/// One outcome: returned when the roll is at or below `threshold`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub threshold: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrete {
    pub bounds: Bounds,
    /// Sorted by ascending threshold
    pub buckets: Vec<Bucket>,
    /// Apply the median power transform to the roll before the scan
    pub shifted: bool,
}

impl Discrete {
    pub fn new(buckets: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::with_median(buckets, 0.5)
    }

    pub fn with_median(buckets: impl IntoIterator<Item = (f64, f64)>, med: f64) -> Self {
        let mut buckets: Vec<Bucket> = buckets
            .into_iter()
            .map(|(threshold, value)| Bucket { threshold, value })
            .collect();
        buckets.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        if buckets.is_empty() {
            tracing::warn!("discrete distribution has no buckets, samples return the median");
        }

        Self {
            bounds: Bounds::with_median(0.0, med, 1.0),
            buckets,
            shifted: false,
        }
    }

    pub fn shifted(mut self, shifted: bool) -> Self {
        self.shifted = shifted;
        self
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = rng.gen::<f64>();
        let roll = if self.shifted {
            self.bounds.shift(u)
        } else {
            self.bounds.min + self.bounds.range * u
        };
        self.bucket_for(roll)
    }

    /// Value of the first bucket whose threshold is at or above `roll`
    pub fn bucket_for(&self, roll: f64) -> f64 {
        self.buckets
            .iter()
            .find(|bucket| roll <= bucket.threshold)
            .or_else(|| self.buckets.last())
            .map(|bucket| bucket.value)
            .unwrap_or(self.bounds.med)
    }
}
