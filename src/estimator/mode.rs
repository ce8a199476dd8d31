use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::estimator::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Transit,
    Drive,
}

impl TravelMode {
    pub const ALL: [TravelMode; 3] = [TravelMode::Walk, TravelMode::Transit, TravelMode::Drive];
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelMode::Walk => write!(f, "walk"),
            TravelMode::Transit => write!(f, "transit"),
            TravelMode::Drive => write!(f, "drive"),
        }
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" | "walking" => Ok(TravelMode::Walk),
            "transit" | "public_transport" => Ok(TravelMode::Transit),
            "drive" | "driving" | "car" => Ok(TravelMode::Drive),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Flat average speeds in km/h, stops and traffic included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTable {
    pub walk_kmh: f64,
    pub transit_kmh: f64,
    pub drive_kmh: f64,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self {
            walk_kmh: 5.0,
            transit_kmh: 30.0,
            drive_kmh: 40.0,
        }
    }
}

impl SpeedTable {
    pub const fn speed(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Walk => self.walk_kmh,
            TravelMode::Transit => self.transit_kmh,
            TravelMode::Drive => self.drive_kmh,
        }
    }

    pub fn with_speed(mut self, mode: TravelMode, kmh: f64) -> Self {
        match mode {
            TravelMode::Walk => self.walk_kmh = kmh,
            TravelMode::Transit => self.transit_kmh = kmh,
            TravelMode::Drive => self.drive_kmh = kmh,
        }
        self
    }
}

/// How fractional minutes become whole minutes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Nearest minute, halves round up.
    #[default]
    Nearest,
    /// Always the next whole minute.
    Up,
}

impl Rounding {
    /// `None` when the rounded minutes do not fit in a `u32`.
    pub fn apply(&self, minutes: f64) -> Option<u32> {
        let rounded = match self {
            Rounding::Nearest => minutes.round(),
            Rounding::Up => minutes.ceil(),
        };
        (rounded.is_finite() && (0.0..=u32::MAX as f64).contains(&rounded))
            .then_some(rounded as u32)
    }
}

#[test]
fn rounding_test() {
    assert_eq!(Rounding::Nearest.apply(22.5), Some(23));
    assert_eq!(Rounding::Nearest.apply(22.49), Some(22));
    assert_eq!(Rounding::Up.apply(22.01), Some(23));
    assert_eq!(Rounding::Up.apply(u32::MAX as f64), Some(u32::MAX));
    assert_eq!(Rounding::Up.apply(u32::MAX as f64 + 0.5), None);
    assert_eq!(Rounding::Nearest.apply(f64::INFINITY), None);
    assert_eq!(Rounding::Nearest.apply(f64::NAN), None);
}
