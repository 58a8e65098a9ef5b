//! Body - physical attributes drawn first in the generation order

use serde::{Deserialize, Serialize};

use crate::core::types::Rgb;

const CM_TO_FEET: f64 = 0.0328;
const KG_TO_LBS: f64 = 2.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Age in years
    pub age: f64,
    /// Height in centimeters
    pub height: u32,
    /// Weight in kilograms, derived from density and height
    pub weight: u32,
    /// Mass per cubic meter of the height cube (kg / m^3 scaled)
    pub density: f64,
    /// Skin lightness (0-1), also used as the skin term of social distance
    pub skin_lum: f64,
    pub skin_color: Rgb,
    pub hair_color: Rgb,
    /// Physical fitness (0-1), peaks near the median density
    pub fitness: f64,
    /// 1 / range of the density distribution this body was drawn from
    pub density_distance_factor: f64,
}

impl Body {
    /// Cubic volume relation between height and weight
    pub fn weight_for(density: f64, height_cm: u32) -> u32 {
        let meters = height_cm as f64 / 100.0;
        (density * meters.powi(3)).max(0.0) as u32
    }

    pub fn height_feet(&self) -> f64 {
        self.height as f64 * CM_TO_FEET
    }

    pub fn weight_lbs(&self) -> f64 {
        self.weight as f64 * KG_TO_LBS
    }
}
