use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Mean earth radius used by the haversine formula.
pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Whole meters, halves rounded away from zero.
    pub fn round_meters(&self) -> u32 {
        self.0.round() as u32
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate {
    /// Finite and inside [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance on a spherical earth.
    pub fn haversine_distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        // rounding can leave `a` just above 1 for near-antipodal points
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_meters(EARTH_RADIUS.as_meters() * c)
    }
}

#[test]
fn distance_test() {
    let seoul = Coordinate::from((37.5665, 126.9780));
    let busan = Coordinate::from((35.1796, 129.0756));
    let d = seoul.haversine_distance(&busan);
    assert!((d.as_kilometers() - 325.0).abs() < 5.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn coordinate_validity_test() {
    assert!(Coordinate::from((90.0, -180.0)).is_valid());
    assert!(!Coordinate::from((90.5, 0.0)).is_valid());
    assert!(!Coordinate::from((0.0, 180.1)).is_valid());
    assert!(!Coordinate::from((f64::NAN, 0.0)).is_valid());
    assert!(!Coordinate::from((0.0, f64::INFINITY)).is_valid());
}

#[test]
fn antipodal_distance_test() {
    let half_circumference = std::f64::consts::PI * EARTH_RADIUS.as_kilometers();
    for latitude in [-87.4853, -86.8616, -84.4559, 0.0, 12.5, 89.0] {
        let a = Coordinate::from((latitude, 10.0));
        let b = Coordinate::from((-latitude, -170.0));
        let d = a.haversine_distance(&b);
        assert!(
            (d.as_kilometers() - half_circumference).abs() < 1.0,
            "{latitude}: {}",
            d.as_kilometers()
        );
    }
}
