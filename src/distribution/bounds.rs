//! Shifted range shared by every distribution
//!
//! A raw draw `u` in [0, 1] is mapped to `min + range * u^k` where
//! `k = log_0.5((med - min) / range)`, so the normalized midpoint 0.5
//! lands exactly on the configured median.

use serde::{Deserialize, Serialize};

/// Smallest distance of the median from `min`, as a fraction of the range
pub const MIN_MEDIAN_FRACTION: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub med: f64,
    pub max: f64,
    pub range: f64,
    shift_exponent: f64,
}

impl Bounds {
    /// Unshifted range with the median at the midpoint
    pub fn centered(min: f64, max: f64) -> Self {
        let (min, max) = ordered(min, max);
        let range = max - min;
        Self {
            min,
            med: min + range / 2.0,
            max,
            range,
            shift_exponent: 1.0,
        }
    }

    /// Range shifted so that the median of uniform input maps to `med`
    ///
    /// `med` is clamped into `[min + 1% of range, max]`; a degenerate range
    /// collapses every sample onto `min`.
    pub fn with_median(min: f64, med: f64, max: f64) -> Self {
        let mut bounds = Self::centered(min, max);
        if bounds.range <= 0.0 || !bounds.range.is_finite() {
            return bounds;
        }

        let floor = bounds.min + MIN_MEDIAN_FRACTION * bounds.range;
        let clamped = if med.is_finite() {
            med.clamp(floor, bounds.max)
        } else {
            bounds.med
        };
        if clamped != med {
            tracing::debug!(
                "median {} outside ({}, {}), clamped to {}",
                med,
                bounds.min,
                bounds.max,
                clamped
            );
        }

        bounds.med = clamped;
        bounds.shift_exponent = ((clamped - bounds.min) / bounds.range).ln() / 0.5f64.ln();
        bounds
    }

    pub fn shift_exponent(&self) -> f64 {
        self.shift_exponent
    }

    pub fn is_degenerate(&self) -> bool {
        self.range <= 0.0
    }

    /// Map a normalized draw onto the range through the power transform
    pub fn shift(&self, input: f64) -> f64 {
        self.min + self.range * input.powf(self.shift_exponent)
    }

    /// Position of `value` within the range: 0 at `min`, 1 at `max`
    pub fn percentile(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.min) / self.range
    }

    /// Fractional distance from the median toward whichever bound `value` faces
    pub fn percent_from_median(&self, value: f64) -> f64 {
        let span = if value < self.med {
            self.med - self.min
        } else {
            self.max - self.med
        };
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.med).abs() / span
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

fn ordered(min: f64, max: f64) -> (f64, f64) {
    if max < min {
        tracing::warn!("distribution bounds reversed ({} > {}), swapping", min, max);
        (max, min)
    } else {
        if max == min {
            tracing::warn!("degenerate distribution range at {}", min);
        }
        (min, max)
    }
}
