use serde::{Deserialize, Serialize};
use tripline::prelude::*;

use crate::dto::{SegmentDto, StopDto, SummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub days: Vec<Vec<StopDto>>,
    pub mode: String,
    /// "HH:MM:SS" or "now". Defaults to 09:00:00.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub dwell_minutes: Option<u32>,
    #[serde(default)]
    pub optimize: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitDto {
    pub stop_id: String,
    pub name: String,
    pub arrival: String,
    pub departure: String,
}

impl VisitDto {
    pub fn from(visit: &Visit) -> Self {
        Self {
            stop_id: visit.stop_id.to_string(),
            name: visit.name.to_string(),
            arrival: visit.arrival.to_hms_string(),
            departure: visit.departure.to_hms_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDto {
    pub visits: Vec<VisitDto>,
    pub segments: Vec<SegmentDto>,
    pub summary: SummaryDto,
    pub ends_next_day: bool,
}

impl DayDto {
    pub fn from(day: &DayPlan) -> Self {
        Self {
            visits: day.visits.iter().map(VisitDto::from).collect(),
            segments: day.segments.iter().map(SegmentDto::from).collect(),
            summary: day.summary.into(),
            ends_next_day: day.ends_next_day,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub days: Vec<DayDto>,
    pub summary: SummaryDto,
}

impl ScheduleResponse {
    pub fn from(trip: &TripPlan) -> Self {
        Self {
            days: trip.days.iter().map(DayDto::from).collect(),
            summary: trip.summary.into(),
        }
    }
}
