//! Socioeconomic standing shared by the family and social attribute groups

use serde::{Deserialize, Serialize};

/// Floor on `1 - class` so the tail formulas stay finite
const MIN_TAIL: f64 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Percentile of socioeconomic class (0-1)
    pub class: f64,
    /// Yearly income
    pub income: f64,
    /// Net wealth, negative for the indebted bottom of the curve
    pub wealth: f64,
}

impl Standing {
    /// Derive income and wealth from a class percentile
    pub fn from_class(class: f64) -> Self {
        let class = class.clamp(0.0, 1.0);
        Self {
            class,
            income: Self::income_for(class),
            wealth: Self::wealth_for(class),
        }
    }

    /// Polynomial below the 80th percentile, Pareto-like tail above it
    pub fn wealth_for(class: f64) -> f64 {
        if class < 0.8 {
            1_000_000.0 * class.powf(3.3) - 1_000.0
        } else if class < 0.99999 {
            100_000.0 / (1.0 - class)
        } else {
            10_000_000_000.0
        }
    }

    pub fn income_for(class: f64) -> f64 {
        let tail = (1.0 - class).max(MIN_TAIL);
        30_000.0 * (2.0 * class + 1.0 / tail.sqrt() - 1.0)
    }
}
