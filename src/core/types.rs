//! Core type definitions used throughout the codebase

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Unique identifier for people, assigned in creation order
#[derive(
    Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[display(fmt = "#{}", _0)]
pub struct PersonId(pub u32);

impl PersonId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Cluster membership shared by faction clustering and friend-group labeling
///
/// Numeric codes follow the usual DBSCAN convention: 0 unclassified,
/// -1 outlier, -2 searching, positive values are cluster ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ClusterLabel {
    #[default]
    Unclassified,
    Outlier,
    /// Transient marker while a traversal has queued but not finished a node
    Searching,
    Cluster(u32),
}

impl ClusterLabel {
    pub const UNCLASSIFIED: i32 = 0;
    pub const OUTLIER: i32 = -1;
    pub const SEARCHING: i32 = -2;

    pub fn code(self) -> i32 {
        self.into()
    }

    pub fn cluster_id(self) -> Option<u32> {
        match self {
            ClusterLabel::Cluster(id) => Some(id),
            _ => None,
        }
    }

    /// Unclassified and outlier points may still be claimed by a cluster
    pub fn is_claimable(self) -> bool {
        matches!(self, ClusterLabel::Unclassified | ClusterLabel::Outlier)
    }
}

impl From<ClusterLabel> for i32 {
    fn from(label: ClusterLabel) -> i32 {
        match label {
            ClusterLabel::Unclassified => ClusterLabel::UNCLASSIFIED,
            ClusterLabel::Outlier => ClusterLabel::OUTLIER,
            ClusterLabel::Searching => ClusterLabel::SEARCHING,
            ClusterLabel::Cluster(id) => id as i32,
        }
    }
}

impl From<i32> for ClusterLabel {
    fn from(code: i32) -> Self {
        match code {
            ClusterLabel::OUTLIER => ClusterLabel::Outlier,
            ClusterLabel::SEARCHING => ClusterLabel::Searching,
            id if id > 0 => ClusterLabel::Cluster(id as u32),
            _ => ClusterLabel::Unclassified,
        }
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert hue (degrees), lightness and saturation (0-1) to RGB
    pub fn from_hls(hue: f64, lightness: f64, saturation: f64) -> Self {
        let l = lightness.clamp(0.0, 1.0);
        let s = saturation.clamp(0.0, 1.0);

        let p2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p1 = 2.0 * l - p2;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            (
                hue_channel(p1, p2, hue + 120.0),
                hue_channel(p1, p2, hue),
                hue_channel(p1, p2, hue - 120.0),
            )
        };

        Self {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }

    /// Relative luminance in 0-1
    pub fn luminance(&self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }
}

fn hue_channel(q1: f64, q2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    if hue < 60.0 {
        q1 + (q2 - q1) * hue / 60.0
    } else if hue < 180.0 {
        q2
    } else if hue < 240.0 {
        q1 + (q2 - q1) * (240.0 - hue) / 60.0
    } else {
        q1
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

/// Point in polar form, angle in [0, 2π)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub radius: f64,
    pub angle: f64,
}

impl Polar {
    pub fn new(radius: f64, angle: f64) -> Self {
        Self {
            radius,
            angle: angle.rem_euclid(2.0 * PI),
        }
    }

    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self::new((x * x + y * y).sqrt(), y.atan2(x))
    }

    pub fn to_cartesian(&self) -> (f64, f64) {
        (self.radius * self.angle.cos(), self.radius * self.angle.sin())
    }

    /// Law-of-cosines distance between two polar points
    pub fn distance(&self, other: &Polar) -> f64 {
        let squared = self.radius * self.radius + other.radius * other.radius
            - 2.0 * self.radius * other.radius * (other.angle - self.angle).cos();
        squared.max(0.0).sqrt()
    }
}
