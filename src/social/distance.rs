//! Social distance between two people
//!
//! Smaller is more alike. The social metric sums normalized per-attribute
//! differences; attribute groups missing on either side contribute nothing.
//! Every term is symmetric, so `distance(a, b) == distance(b, a)`.

use serde::{Deserialize, Serialize};

use crate::entity::{Body, Mind, Person};

/// How mutual friends pull two people closer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "factor", rename_all = "snake_case")]
pub enum SharedFriendBonus {
    None,
    /// Multiply by `factor^shared`
    Decay(f64),
    /// Subtract `factor * shared`, floored at zero
    Subtract(f64),
}

impl SharedFriendBonus {
    pub fn apply(self, distance: f64, shared: usize) -> f64 {
        match self {
            SharedFriendBonus::None => distance,
            SharedFriendBonus::Decay(factor) => distance * factor.powi(shared as i32),
            SharedFriendBonus::Subtract(weight) => (distance - weight * shared as f64).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMode {
    /// Attribute distance only
    Social,
    /// Attribute distance with the shared-friend bonus
    Clustered,
    /// Scaled distance between political positions
    Political,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Weight on the relative age difference
    pub age_weight: f64,
    pub skin_weight: f64,
    pub density_weight: f64,
    pub iq_weight: f64,
    pub confidence_weight: f64,
    pub political_weight: f64,
    /// Use polar distance for the political term instead of category centroids
    pub exact_political: bool,
    pub shared_friend_bonus: SharedFriendBonus,
    /// Multiplier on political distance in political mode
    pub political_scale: f64,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            age_weight: 4.0,
            skin_weight: 1.0,
            density_weight: 1.0,
            iq_weight: 1.0,
            confidence_weight: 1.0,
            political_weight: 1.0,
            exact_political: false,
            shared_friend_bonus: SharedFriendBonus::Decay(0.8),
            political_scale: 10.0,
        }
    }
}

impl DistanceConfig {
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("age_weight", self.age_weight),
            ("skin_weight", self.skin_weight),
            ("density_weight", self.density_weight),
            ("iq_weight", self.iq_weight),
            ("confidence_weight", self.confidence_weight),
            ("political_weight", self.political_weight),
            ("political_scale", self.political_scale),
        ];
        for (name, weight) in weights {
            if !(weight >= 0.0 && weight.is_finite()) {
                return Err(format!("{} must be a non-negative number", name));
            }
        }
        match self.shared_friend_bonus {
            SharedFriendBonus::Decay(f) if !(f > 0.0 && f <= 1.0) => {
                Err("shared friend decay must be within (0, 1]".into())
            }
            SharedFriendBonus::Subtract(w) if !(w >= 0.0 && w.is_finite()) => {
                Err("shared friend subtraction must be non-negative".into())
            }
            _ => Ok(()),
        }
    }
}

pub fn distance(a: &Person, b: &Person, mode: DistanceMode, config: &DistanceConfig) -> f64 {
    if a.id == b.id {
        return 0.0;
    }
    match mode {
        DistanceMode::Social => attribute_distance(a, b, config),
        DistanceMode::Clustered => {
            let shared = a.friends.shared_with(&b.friends);
            config
                .shared_friend_bonus
                .apply(attribute_distance(a, b, config), shared)
        }
        DistanceMode::Political => political_distance(a, b, config),
    }
}

pub fn political_distance(a: &Person, b: &Person, config: &DistanceConfig) -> f64 {
    match (&a.mind, &b.mind) {
        (Some(ma), Some(mb)) => config.political_scale * ma.political.distance(&mb.political, true),
        _ => 0.0,
    }
}

fn attribute_distance(a: &Person, b: &Person, config: &DistanceConfig) -> f64 {
    let mut total = 0.0;
    if let (Some(ba), Some(bb)) = (&a.body, &b.body) {
        total += body_distance(ba, bb, config);
    }
    if let (Some(ma), Some(mb)) = (&a.mind, &b.mind) {
        total += mind_distance(ma, mb, config);
    }
    total
}

fn body_distance(a: &Body, b: &Body, config: &DistanceConfig) -> f64 {
    let age_sum = a.age + b.age;
    let age = if age_sum > 0.0 {
        (a.age - b.age).abs() / age_sum
    } else {
        0.0
    };
    let density_factor = (a.density_distance_factor + b.density_distance_factor) / 2.0;

    config.age_weight * age
        + config.skin_weight * (a.skin_lum - b.skin_lum).abs()
        + config.density_weight * (a.density - b.density).abs() * density_factor
}

fn mind_distance(a: &Mind, b: &Mind, config: &DistanceConfig) -> f64 {
    let iq_factor = (a.iq_distance_factor + b.iq_distance_factor) / 2.0;
    let iq_gap = (a.iq as f64 - b.iq as f64).abs();

    config.iq_weight * iq_gap * iq_factor
        // Similar confidence repels, opposites attract
        + config.confidence_weight * (1.0 - (a.confidence - b.confidence).abs())
        + config.political_weight * a.political.distance(&b.political, config.exact_political)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{PersonId, Rgb};
    use crate::entity::PoliticalView;
    use crate::generation::PatternKey;

    fn sample_person(id: u32, age: f64, iq: u32, x: f64, y: f64) -> Person {
        let mut person = Person::new(PersonId(id), PatternKey(0));
        person.body = Some(Body {
            age,
            height: 170,
            weight: 63,
            density: 13.0,
            skin_lum: 0.45,
            skin_color: Rgb::default(),
            hair_color: Rgb::default(),
            fitness: 0.5,
            density_distance_factor: 1.0 / 17.0,
        });
        person.mind = Some(Mind {
            iq,
            confidence: 0.5,
            friend_mult: 0.5,
            education: 12,
            iq_distance_factor: 0.01,
            political: PoliticalView::from_cartesian(x, y),
        });
        person
    }

    #[test]
    fn test_self_distance_is_zero() {
        let a = sample_person(0, 30.0, 100, 0.5, 0.5);
        for mode in [DistanceMode::Social, DistanceMode::Clustered, DistanceMode::Political] {
            assert_eq!(distance(&a, &a, mode, &DistanceConfig::default()), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = sample_person(0, 25.0, 90, 0.6, 0.1);
        let b = sample_person(1, 60.0, 130, -0.3, -0.7);
        let config = DistanceConfig::default();
        for mode in [DistanceMode::Social, DistanceMode::Clustered, DistanceMode::Political] {
            let (ab, ba) = (distance(&a, &b, mode, &config), distance(&b, &a, mode, &config));
            assert!((ab - ba).abs() < 1e-12, "{:?}: {} vs {}", mode, ab, ba);
        }
    }

    #[test]
    fn test_equal_ages_contribute_nothing() {
        let a = sample_person(0, 30.0, 100, 0.5, 0.5);
        let b = sample_person(1, 30.0, 100, 0.5, 0.5);
        // Only the confidence complement remains for identical attributes
        let d = distance(&a, &b, DistanceMode::Social, &DistanceConfig::default());
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_groups_contribute_nothing() {
        let a = Person::new(PersonId(0), PatternKey(0));
        let b = sample_person(1, 30.0, 100, 0.5, 0.5);
        let config = DistanceConfig::default();
        assert_eq!(distance(&a, &b, DistanceMode::Social, &config), 0.0);
        assert_eq!(distance(&a, &b, DistanceMode::Political, &config), 0.0);
    }

    #[test]
    fn test_political_mode_scales_polar_distance() {
        let a = sample_person(0, 30.0, 100, 0.5, 0.0);
        let b = sample_person(1, 30.0, 100, -0.5, 0.0);
        let d = distance(&a, &b, DistanceMode::Political, &DistanceConfig::default());
        assert!((d - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_shared_friend_bonus() {
        assert_eq!(SharedFriendBonus::Decay(0.8).apply(2.0, 0), 2.0);
        assert!((SharedFriendBonus::Decay(0.8).apply(2.0, 2) - 1.28).abs() < 1e-12);
        assert_eq!(SharedFriendBonus::Subtract(0.5).apply(1.2, 3), 0.0);
        assert_eq!(SharedFriendBonus::None.apply(1.2, 3), 1.2);
    }

    #[test]
    fn test_clustered_mode_rewards_mutual_friends() {
        let mut a = sample_person(0, 25.0, 90, 0.6, 0.1);
        let mut b = sample_person(1, 50.0, 120, -0.6, 0.1);
        let config = DistanceConfig::default();
        let before = distance(&a, &b, DistanceMode::Clustered, &config);
        a.friends.insert(PersonId(9), 0.1);
        b.friends.insert(PersonId(9), 0.1);
        let after = distance(&a, &b, DistanceMode::Clustered, &config);
        assert!((after - before * 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_config_validation() {
        assert!(DistanceConfig::default().validate().is_ok());
        let bad = DistanceConfig {
            shared_friend_bonus: SharedFriendBonus::Decay(1.5),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let negative = DistanceConfig {
            iq_weight: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }
}
