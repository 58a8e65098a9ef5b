//! Truncated, shifted Gaussian sampler
//!
//! Draws live in a normalized space with mean 0.5 and deviation `norm_dev`,
//! then pass through the same power transform as the uniform sampler.
//! Box–Muller input is truncated so the normalized draw never leaves [0, 1].
//!
//! When a filter bound sits more than two deviations past the midpoint,
//! rejection sampling would throw away nearly every draw. In that
//! "extreme" configuration the sampler degrades to a uniform draw over the
//! filtered window instead.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;

/// Draws rejected before falling back to a uniform draw over the filter
const MAX_REJECTIONS: usize = 10_000;

/// Default deviation as a fraction of the range (±3σ spans it)
const DEFAULT_NORM_DEV: f64 = 1.0 / 6.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    pub bounds: Bounds,
    pub std_dev: f64,
    pub norm_dev: f64,
    pub filter_min: f64,
    pub filter_max: f64,
    truncate_exponent: f64,
    /// Narrowed window used instead of rejection sampling in extreme mode
    extreme_window: Option<(f64, f64)>,
}

impl Gaussian {
    /// Unshifted Gaussian spanning ±3σ over the range
    pub fn new(min: f64, max: f64) -> Self {
        let bounds = Bounds::centered(min, max);
        Self::resolve(bounds, bounds.range * DEFAULT_NORM_DEV, bounds.min, bounds.max)
    }

    pub fn with_median(min: f64, med: f64, max: f64, std_dev: f64) -> Self {
        let bounds = Bounds::with_median(min, med, max);
        Self::resolve(bounds, std_dev, bounds.min, bounds.max)
    }

    /// Median with the default deviation of one sixth of the range
    pub fn with_default_dev(min: f64, med: f64, max: f64) -> Self {
        let bounds = Bounds::with_median(min, med, max);
        Self::resolve(bounds, bounds.range * DEFAULT_NORM_DEV, bounds.min, bounds.max)
    }

    /// Restrict accepted samples to `[filter_min, filter_max]`
    pub fn filtered(self, filter_min: f64, filter_max: f64) -> Self {
        Self::resolve(self.bounds, self.std_dev, filter_min, filter_max)
    }

    fn resolve(bounds: Bounds, std_dev: f64, filter_min: f64, filter_max: f64) -> Self {
        let std_dev = if std_dev > 0.0 && std_dev.is_finite() {
            std_dev
        } else {
            tracing::warn!("invalid standard deviation {}, using range / 6", std_dev);
            bounds.range * DEFAULT_NORM_DEV
        };
        let norm_dev = if bounds.is_degenerate() {
            DEFAULT_NORM_DEV
        } else {
            std_dev / bounds.range
        };

        let (mut filter_min, mut filter_max) = (
            filter_min.clamp(bounds.min, bounds.max),
            filter_max.clamp(bounds.min, bounds.max),
        );
        if filter_min > filter_max {
            tracing::warn!(
                "filter bounds reversed ({} > {}), swapping",
                filter_min,
                filter_max
            );
            std::mem::swap(&mut filter_min, &mut filter_max);
        }

        let mid = bounds.min + bounds.range / 2.0;
        let extreme_low = filter_min > mid + 2.0 * std_dev;
        let extreme_high = filter_max < mid - 2.0 * std_dev;
        let extreme_window = (extreme_low || extreme_high).then_some((filter_min, filter_max));

        Self {
            bounds,
            std_dev,
            norm_dev,
            filter_min,
            filter_max,
            truncate_exponent: (-0.5 * (0.5 / norm_dev).powi(2)).exp(),
            extreme_window,
        }
    }

    pub fn is_extreme(&self) -> bool {
        self.extreme_window.is_some()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.bounds.is_degenerate() {
            return self.bounds.min;
        }
        if let Some((lo, hi)) = self.extreme_window {
            return lo + (hi - lo) * rng.gen::<f64>();
        }

        for _ in 0..MAX_REJECTIONS {
            let result = self.bounds.shift(self.normalized(rng));
            if result.is_nan() {
                tracing::warn!(
                    "NaN from gaussian transform (norm_dev {}, truncate {}), redrawing",
                    self.norm_dev,
                    self.truncate_exponent
                );
                continue;
            }
            if result >= self.filter_min && result <= self.filter_max {
                return result;
            }
        }

        tracing::warn!(
            "gaussian filter [{}, {}] rejected {} draws, falling back to uniform",
            self.filter_min,
            self.filter_max,
            MAX_REJECTIONS
        );
        self.filter_min + (self.filter_max - self.filter_min) * rng.gen::<f64>()
    }

    /// Box–Muller draw mapped to mean 0.5, with `u1` truncated so |z| <= 0.5 / norm_dev
    fn normalized<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u1 = rng.gen::<f64>() * (1.0 - self.truncate_exponent) + self.truncate_exponent;
        let u2 = rng.gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).sin();
        0.5 + self.norm_dev * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn median_of(dist: &Gaussian, rng: &mut ChaCha8Rng, n: usize) -> f64 {
        let mut samples: Vec<f64> = (0..n).map(|_| dist.sample(rng)).collect();
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        samples[n / 2]
    }

    #[test]
    fn test_samples_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let dist = Gaussian::with_median(18.0, 30.0, 107.0, 15.0);
        for _ in 0..10_000 {
            let x = dist.sample(&mut rng);
            assert!((18.0..=107.0).contains(&x), "sample {} out of range", x);
        }
    }

    #[test]
    fn test_median_tightens_with_sample_count() {
        let dist = Gaussian::with_median(18.0, 30.0, 107.0, 15.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let coarse = median_of(&dist, &mut rng, 1_000);
        let fine = median_of(&dist, &mut rng, 40_000);
        assert!((coarse - 30.0).abs() < 3.0, "coarse median {}", coarse);
        assert!((fine - 30.0).abs() < 1.0, "fine median {}", fine);
    }

    #[test]
    fn test_filter_is_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let dist = Gaussian::with_median(0.0, 50.0, 100.0, 20.0).filtered(40.0, 70.0);
        assert!(!dist.is_extreme());
        for _ in 0..5_000 {
            let x = dist.sample(&mut rng);
            assert!((40.0..=70.0).contains(&x));
        }
    }

    #[test]
    fn test_extreme_filter_degrades_to_uniform_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        // Midpoint 50, 2σ = 10: a filter starting at 80 is extreme
        let dist = Gaussian::with_median(0.0, 50.0, 100.0, 5.0).filtered(80.0, 100.0);
        assert!(dist.is_extreme());

        let samples: Vec<f64> = (0..5_000).map(|_| dist.sample(&mut rng)).collect();
        assert!(samples.iter().all(|x| (80.0..=100.0).contains(x)));
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - 90.0).abs() < 1.0, "uniform window mean {}", mean);
    }

    #[test]
    fn test_extreme_high_filter() {
        let dist = Gaussian::with_median(0.0, 50.0, 100.0, 5.0).filtered(0.0, 20.0);
        assert!(dist.is_extreme());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert!((0..1_000).all(|_| dist.sample(&mut rng) <= 20.0));
    }

    #[test]
    fn test_narrow_deviation_never_yields_nan() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let dist = Gaussian::with_median(0.30, 0.42, 0.50, 0.001);
        for _ in 0..2_000 {
            let x = dist.sample(&mut rng);
            assert!(!x.is_nan());
            assert!((0.30..=0.50).contains(&x));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let dist = Gaussian::with_median(4.0, 4.0, 4.0, 1.0);
        assert_eq!(dist.sample(&mut rng), 4.0);
    }
}
