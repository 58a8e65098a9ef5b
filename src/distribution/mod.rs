//! Parametrized random-sample generators
//!
//! Every generated attribute is drawn from one of these. All samplers take
//! the random source explicitly so a seeded generator reproduces a
//! population exactly.

pub mod bounds;
pub mod discrete;
pub mod gaussian;
pub mod uniform;

pub use bounds::Bounds;
pub use discrete::{Bucket, Discrete};
pub use gaussian::Gaussian;
pub use uniform::Uniform;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DistributionSpec", into = "DistributionSpec")]
pub enum Distribution {
    Uniform(Uniform),
    Gaussian(Gaussian),
    Discrete(Discrete),
}

impl Distribution {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Distribution::Uniform(d) => d.sample(rng),
            Distribution::Gaussian(d) => d.sample(rng),
            Distribution::Discrete(d) => d.sample(rng),
        }
    }

    pub fn bounds(&self) -> &Bounds {
        match self {
            Distribution::Uniform(d) => &d.bounds,
            Distribution::Gaussian(d) => &d.bounds,
            Distribution::Discrete(d) => &d.bounds,
        }
    }

    pub fn min(&self) -> f64 {
        self.bounds().min
    }

    pub fn max(&self) -> f64 {
        self.bounds().max
    }

    pub fn med(&self) -> f64 {
        self.bounds().med
    }

    pub fn range(&self) -> f64 {
        self.bounds().range
    }

    pub fn percentile(&self, value: f64) -> f64 {
        self.bounds().percentile(value)
    }

    pub fn percent_from_median(&self, value: f64) -> f64 {
        self.bounds().percent_from_median(value)
    }
}

impl From<Uniform> for Distribution {
    fn from(d: Uniform) -> Self {
        Distribution::Uniform(d)
    }
}

impl From<Gaussian> for Distribution {
    fn from(d: Gaussian) -> Self {
        Distribution::Gaussian(d)
    }
}

impl From<Discrete> for Distribution {
    fn from(d: Discrete) -> Self {
        Distribution::Discrete(d)
    }
}

/// Raw distribution parameters as written in configuration files
///
/// ```toml
/// [cohorts.overrides.ages]
/// kind = "gaussian"
/// min = 18.0
/// med = 22.0
/// max = 50.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionSpec {
    Uniform {
        min: f64,
        max: f64,
        med: Option<f64>,
    },
    Gaussian {
        min: f64,
        max: f64,
        med: Option<f64>,
        std_dev: Option<f64>,
        filter_min: Option<f64>,
        filter_max: Option<f64>,
    },
    Discrete {
        buckets: Vec<Bucket>,
        med: Option<f64>,
        #[serde(default)]
        shifted: bool,
    },
}

impl From<DistributionSpec> for Distribution {
    fn from(spec: DistributionSpec) -> Self {
        match spec {
            DistributionSpec::Uniform { min, max, med } => match med {
                Some(med) => Uniform::with_median(min, med, max),
                None => Uniform::new(min, max),
            }
            .into(),
            DistributionSpec::Gaussian {
                min,
                max,
                med,
                std_dev,
                filter_min,
                filter_max,
            } => {
                let base = match (med, std_dev) {
                    (None, None) => Gaussian::new(min, max),
                    (med, Some(dev)) => {
                        Gaussian::with_median(min, med.unwrap_or((min + max) / 2.0), max, dev)
                    }
                    (Some(med), None) => Gaussian::with_default_dev(min, med, max),
                };
                let (lo, hi) = (
                    filter_min.unwrap_or(base.bounds.min),
                    filter_max.unwrap_or(base.bounds.max),
                );
                base.filtered(lo, hi).into()
            }
            DistributionSpec::Discrete {
                buckets,
                med,
                shifted,
            } => Discrete::with_median(
                buckets.into_iter().map(|b| (b.threshold, b.value)),
                med.unwrap_or(0.5),
            )
            .shifted(shifted)
            .into(),
        }
    }
}

impl From<Distribution> for DistributionSpec {
    fn from(dist: Distribution) -> Self {
        match dist {
            Distribution::Uniform(d) => DistributionSpec::Uniform {
                min: d.bounds.min,
                max: d.bounds.max,
                med: Some(d.bounds.med),
            },
            Distribution::Gaussian(d) => DistributionSpec::Gaussian {
                min: d.bounds.min,
                max: d.bounds.max,
                med: Some(d.bounds.med),
                std_dev: Some(d.std_dev),
                filter_min: Some(d.filter_min),
                filter_max: Some(d.filter_max),
            },
            Distribution::Discrete(d) => DistributionSpec::Discrete {
                buckets: d.buckets,
                med: Some(d.bounds.med),
                shifted: d.shifted,
            },
        }
    }
}
