//! Shifted uniform sampler

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uniform {
    pub bounds: Bounds,
}

impl Uniform {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            bounds: Bounds::centered(min, max),
        }
    }

    pub fn with_median(min: f64, med: f64, max: f64) -> Self {
        Self {
            bounds: Bounds::with_median(min, med, max),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.bounds.shift(rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mocked_half_returns_median() {
        // next_u64 = 2^63 yields exactly 0.5 from the standard f64 conversion
        let mut rng = StepRng::new(1 << 63, 0);
        let dist = Uniform::with_median(0.0, 3.0, 10.0);
        assert!((dist.sample(&mut rng) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_samples_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let dist = Uniform::with_median(0.05, 0.45, 0.85);
        for _ in 0..10_000 {
            let x = dist.sample(&mut rng);
            assert!((0.05..=0.85).contains(&x), "sample {} out of range", x);
        }
    }

    #[test]
    fn test_sample_median_tracks_configured_median() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let dist = Uniform::with_median(0.0, 2.0, 10.0);
        let mut samples: Vec<f64> = (0..20_000).map(|_| dist.sample(&mut rng)).collect();
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = samples[samples.len() / 2];
        assert!((median - 2.0).abs() < 0.15, "median {}", median);
    }
}
