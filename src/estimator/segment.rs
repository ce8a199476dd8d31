use std::sync::Arc;

use crate::estimator::TravelMode;

/// One travel leg between two consecutive stops.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub from_stop_id: Arc<str>,
    pub to_stop_id: Arc<str>,
    pub distance_meters: u32,
    pub duration_minutes: u32,
    pub mode: TravelMode,
    /// Depart and arrive lines for display.
    pub descriptive_steps: [String; 2],
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouteSummary {
    pub total_duration_minutes: u64,
    pub total_distance_meters: u64,
    pub segment_count: usize,
}

impl RouteSummary {
    pub fn from_segments(segments: &[RouteSegment]) -> Self {
        segments.iter().fold(Self::default(), |mut summary, segment| {
            summary.total_duration_minutes += segment.duration_minutes as u64;
            summary.total_distance_meters += segment.distance_meters as u64;
            summary.segment_count += 1;
            summary
        })
    }

    /// Adds another summary, used when several day routes make up one trip.
    pub fn merge(self, other: Self) -> Self {
        Self {
            total_duration_minutes: self.total_duration_minutes + other.total_duration_minutes,
            total_distance_meters: self.total_distance_meters + other.total_distance_meters,
            segment_count: self.segment_count + other.segment_count,
        }
    }
}
