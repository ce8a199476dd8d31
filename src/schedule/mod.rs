use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{
    estimator::{self, RouteEstimator, RouteSegment, RouteSummary, TravelMode},
    shared::{Duration, Identifiable, Time, Waypoint},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Estimator(#[from] estimator::Error),
    #[error("Timeline passes the last representable time after stop {0}")]
    TimeOverflow(String),
}

const DEFAULT_START: Time = Time::from_seconds(9 * 60 * 60);
const DEFAULT_DWELL: Duration = Duration::from_seconds(60 * 60);

/// A stop on the day's timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub stop_id: Arc<str>,
    pub name: Arc<str>,
    pub arrival: Time,
    pub departure: Time,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayPlan {
    pub visits: Vec<Visit>,
    pub segments: Vec<RouteSegment>,
    pub summary: RouteSummary,
    /// Set when the last departure is past midnight.
    pub ends_next_day: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPlan {
    pub days: Vec<DayPlan>,
    pub summary: RouteSummary,
}

/// Lays stops out on a timeline: arrive, stay for `dwell`, then travel the
/// estimated segment to the next stop.
pub struct DayPlanner<'a> {
    estimator: &'a RouteEstimator,
    mode: TravelMode,
    start: Time,
    dwell: Duration,
    optimize: bool,
}

impl<'a> DayPlanner<'a> {
    pub fn new(estimator: &'a RouteEstimator, mode: TravelMode) -> Self {
        Self {
            estimator,
            mode,
            start: DEFAULT_START,
            dwell: DEFAULT_DWELL,
            optimize: false,
        }
    }

    pub fn starting_at(mut self, start: Time) -> Self {
        self.start = start;
        self
    }

    pub fn dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    /// Reorder each day with the nearest-neighbour heuristic before planning.
    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn plan_day<T>(&self, stops: &[T]) -> Result<DayPlan, self::Error>
    where
        T: Waypoint + Clone + Sync,
    {
        let ordered;
        let stops = if self.optimize {
            ordered = self.estimator.optimize_stop_order(stops)?;
            ordered.as_slice()
        } else {
            stops
        };

        let segments = self.estimator.compute_route(stops, self.mode)?;
        let mut visits = Vec::with_capacity(stops.len());
        let mut clock = self.start;
        for (index, stop) in stops.iter().enumerate() {
            let overflow = || Error::TimeOverflow(stop.id().to_string());
            let arrival = clock;
            let departure = arrival.checked_add(self.dwell).ok_or_else(overflow)?;
            visits.push(Visit {
                stop_id: stop.id().into(),
                name: stop.name().into(),
                arrival,
                departure,
            });
            clock = departure;
            if let Some(segment) = segments.get(index) {
                clock = Duration::from_minutes(segment.duration_minutes)
                    .and_then(|travel| clock.checked_add(travel))
                    .ok_or_else(overflow)?;
            }
        }

        let ends_next_day = visits
            .last()
            .is_some_and(|visit| visit.departure.is_next_day());
        let summary = RouteSummary::from_segments(&segments);
        debug!(
            "Planned {} visits, {} minutes of travel",
            visits.len(),
            summary.total_duration_minutes
        );
        Ok(DayPlan {
            visits,
            segments,
            summary,
            ends_next_day,
        })
    }

    /// Plans every day independently; each day starts at the same time.
    pub fn plan_trip<T>(&self, days: &[Vec<T>]) -> Result<TripPlan, self::Error>
    where
        T: Waypoint + Clone + Sync,
    {
        let days = days
            .iter()
            .map(|day| self.plan_day(day))
            .collect::<Result<Vec<_>, _>>()?;
        let summary = days
            .iter()
            .fold(RouteSummary::default(), |acc, day| acc.merge(day.summary));
        Ok(TripPlan { days, summary })
    }
}
