mod mode;
mod segment;

pub use mode::*;
pub use segment::*;

use crate::shared::{Identifiable, Waypoint};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Coordinate ({latitude}, {longitude}) is not a valid position")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("Travel mode {0} is not supported")]
    InvalidMode(String),
}

/// Estimates travel legs between stops using great-circle distances and a
/// flat speed per travel mode.
///
/// The estimator only holds configuration, so one instance can be shared
/// freely between threads. Distances assume a spherical earth and durations
/// ignore road networks, timetables and traffic.
#[derive(Debug, Clone, Default)]
pub struct RouteEstimator {
    speeds: SpeedTable,
    rounding: Rounding,
}

impl RouteEstimator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_speeds(mut self, speeds: SpeedTable) -> Self {
        self.speeds = speeds;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn speeds(&self) -> &SpeedTable {
        &self.speeds
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Haversine distance between two stops in whole meters.
    pub fn estimate_geodesic_distance<A, B>(&self, a: &A, b: &B) -> Result<u32, self::Error>
    where
        A: Waypoint + ?Sized,
        B: Waypoint + ?Sized,
    {
        validate(a)?;
        validate(b)?;
        Ok(a.coordinate()
            .haversine_distance(&b.coordinate())
            .round_meters())
    }

    /// Travel time in whole minutes for `distance_meters` at the mode's speed.
    pub fn estimate_duration(
        &self,
        distance_meters: u32,
        mode: TravelMode,
    ) -> Result<u32, self::Error> {
        let speed = self.speed_kmh(mode)?;
        let minutes = distance_meters as f64 / 1000.0 / speed * 60.0;
        self.rounding.apply(minutes).ok_or_else(|| {
            Error::InvalidMode(format!("{mode} at {speed} km/h over {distance_meters} m"))
        })
    }

    /// One segment per consecutive pair of stops, in the order given.
    /// Fewer than two stops is an empty route, not an error.
    pub fn compute_route<T>(
        &self,
        stops: &[T],
        mode: TravelMode,
    ) -> Result<Vec<RouteSegment>, self::Error>
    where
        T: Waypoint + Sync,
    {
        if stops.len() < 2 {
            return Ok(Vec::new());
        }
        self.speed_kmh(mode)?;
        stops.iter().try_for_each(validate)?;

        let segments: Vec<RouteSegment> = stops
            .par_windows(2)
            .map(|pair| self.segment(&pair[0], &pair[1], mode))
            .collect::<Result<_, _>>()?;
        debug!(
            "Computed {} segments for {} stops by {}",
            segments.len(),
            stops.len(),
            mode
        );
        Ok(segments)
    }

    /// Greedy nearest-neighbour ordering anchored on the first stop.
    ///
    /// Each step appends the remaining stop closest to the last placed one;
    /// on equal distances the stop that came first in the input wins. The
    /// result is a permutation of `stops` with the same first element, but
    /// it is not guaranteed to be the shortest tour.
    pub fn optimize_stop_order<T>(&self, stops: &[T]) -> Result<Vec<T>, self::Error>
    where
        T: Waypoint + Clone,
    {
        if stops.len() <= 2 {
            return Ok(stops.to_vec());
        }
        stops.iter().try_for_each(validate)?;

        let mut ordered: Vec<T> = Vec::with_capacity(stops.len());
        let mut current = &stops[0];
        ordered.push(current.clone());
        let mut remaining: Vec<&T> = stops[1..].iter().collect();

        while !remaining.is_empty() {
            let mut best_index = 0;
            let mut best_distance = u32::MAX;
            for (index, candidate) in remaining.iter().enumerate() {
                let distance = self.estimate_geodesic_distance(current, *candidate)?;
                if distance < best_distance {
                    best_index = index;
                    best_distance = distance;
                }
            }
            current = remaining.remove(best_index);
            ordered.push(current.clone());
        }

        debug!("Reordered {} stops from {}", ordered.len(), stops[0].id());
        Ok(ordered)
    }

    pub fn summarize_route(&self, segments: &[RouteSegment]) -> RouteSummary {
        RouteSummary::from_segments(segments)
    }

    fn speed_kmh(&self, mode: TravelMode) -> Result<f64, self::Error> {
        let speed = self.speeds.speed(mode);
        if speed.is_finite() && speed > 0.0 {
            Ok(speed)
        } else {
            Err(Error::InvalidMode(format!("{mode} at {speed} km/h")))
        }
    }

    fn segment<T: Waypoint>(
        &self,
        from: &T,
        to: &T,
        mode: TravelMode,
    ) -> Result<RouteSegment, self::Error> {
        let distance_meters = self.estimate_geodesic_distance(from, to)?;
        let duration_minutes = self.estimate_duration(distance_meters, mode)?;
        Ok(RouteSegment {
            from_stop_id: from.id().into(),
            to_stop_id: to.id().into(),
            distance_meters,
            duration_minutes,
            mode,
            descriptive_steps: [
                format!("Depart from {}", label(from)),
                format!("Arrive at {}", label(to)),
            ],
        })
    }
}

fn validate<T: Waypoint + ?Sized>(stop: &T) -> Result<(), self::Error> {
    let coordinate = stop.coordinate();
    if coordinate.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        })
    }
}

fn label<T: Identifiable + ?Sized>(stop: &T) -> &str {
    if stop.name().is_empty() {
        stop.id()
    } else {
        stop.name()
    }
}
