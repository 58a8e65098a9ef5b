//! Mind - cognitive attributes and political orientation

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::types::Polar;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mind {
    pub iq: u32,
    /// Blend of fitness-weighted self-image and age (0-1)
    pub confidence: f64,
    /// Scales how many friends this person looks for
    pub friend_mult: f64,
    /// Years of education
    pub education: u32,
    /// 1 / range of the IQ distribution this mind was drawn from
    pub iq_distance_factor: f64,
    pub political: PoliticalView,
}

impl Mind {
    pub fn friend_multiplier(confidence: f64) -> f64 {
        (2.0 * confidence).powi(3) / 2.0
    }
}

/// Political categories: a neutral centre ringed by eight value orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoliticalCategory {
    Centrism,
    SelfDirection,
    Universalism,
    Benevolence,
    Tradition,
    Security,
    Power,
    Achievement,
    Stimulation,
}

/// Distances between category centroids (centre at origin, values on a ring)
const CENTER_DISTANCE: [[f64; PoliticalCategory::COUNT]; PoliticalCategory::COUNT] = [
    [0.00, 0.75, 0.75, 0.75, 0.75, 0.75, 0.75, 0.75, 0.75],
    [0.75, 0.00, 0.57, 1.05, 1.38, 1.49, 1.38, 1.05, 0.57],
    [0.75, 0.57, 0.00, 0.57, 1.05, 1.38, 1.49, 1.38, 1.05],
    [0.75, 1.05, 0.57, 0.00, 0.57, 1.05, 1.38, 1.49, 1.38],
    [0.75, 1.38, 1.05, 0.57, 0.00, 0.57, 1.05, 1.38, 1.49],
    [0.75, 1.49, 1.38, 1.05, 0.57, 0.00, 0.57, 1.05, 1.38],
    [0.75, 1.38, 1.49, 1.38, 1.05, 0.57, 0.00, 0.57, 1.05],
    [0.75, 1.05, 1.38, 1.49, 1.38, 1.05, 0.57, 0.00, 0.57],
    [0.75, 0.57, 1.05, 1.38, 1.49, 1.38, 1.05, 0.57, 0.00],
];

impl PoliticalCategory {
    pub const COUNT: usize = 9;

    pub const ALL: [PoliticalCategory; Self::COUNT] = [
        PoliticalCategory::Centrism,
        PoliticalCategory::SelfDirection,
        PoliticalCategory::Universalism,
        PoliticalCategory::Benevolence,
        PoliticalCategory::Tradition,
        PoliticalCategory::Security,
        PoliticalCategory::Power,
        PoliticalCategory::Achievement,
        PoliticalCategory::Stimulation,
    ];

    /// Radius below which a view counts as centrist
    pub fn neutral_radius() -> f64 {
        (1.0 / Self::COUNT as f64).sqrt()
    }

    /// Classify a point in the unit disk by radius and angular bucket
    pub fn classify(position: Polar) -> Self {
        if position.radius < Self::neutral_radius() {
            return PoliticalCategory::Centrism;
        }
        let sectors = (Self::COUNT - 1) as f64;
        let bucket = (position.angle * sectors / (2.0 * PI)).round() as usize % (Self::COUNT - 1);
        Self::ALL[bucket + 1]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn acronym(self) -> &'static str {
        match self {
            PoliticalCategory::Centrism => "CEN",
            PoliticalCategory::SelfDirection => "SDI",
            PoliticalCategory::Universalism => "UNI",
            PoliticalCategory::Benevolence => "BEN",
            PoliticalCategory::Tradition => "TRA",
            PoliticalCategory::Security => "SEC",
            PoliticalCategory::Power => "POW",
            PoliticalCategory::Achievement => "ACH",
            PoliticalCategory::Stimulation => "STI",
        }
    }

    pub fn center_distance(self, other: PoliticalCategory) -> f64 {
        CENTER_DISTANCE[self.index()][other.index()]
    }
}

/// A point in the political unit disk plus its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoliticalView {
    pub position: Polar,
    pub category: PoliticalCategory,
}

impl PoliticalView {
    pub fn new(position: Polar) -> Self {
        Self {
            position,
            category: PoliticalCategory::classify(position),
        }
    }

    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self::new(Polar::from_cartesian(x, y))
    }

    pub fn radius(&self) -> f64 {
        self.position.radius
    }

    pub fn angle(&self) -> f64 {
        self.position.angle
    }

    /// Polar distance when `exact`, otherwise the category-centroid distance
    pub fn distance(&self, other: &PoliticalView, exact: bool) -> f64 {
        if exact {
            self.position.distance(&other.position)
        } else {
            self.category.center_distance(other.category)
        }
    }
}
