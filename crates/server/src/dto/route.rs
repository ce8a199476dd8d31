use serde::{Deserialize, Serialize};
use tripline::prelude::*;

use crate::dto::StopDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub stops: Vec<StopDto>,
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub stops: Vec<StopDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub stops: Vec<StopDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDto {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub distance_meters: u32,
    pub duration_minutes: u32,
    pub mode: TravelMode,
    pub descriptive_steps: Vec<String>,
}

impl SegmentDto {
    pub fn from(segment: &RouteSegment) -> Self {
        Self {
            from_stop_id: segment.from_stop_id.to_string(),
            to_stop_id: segment.to_stop_id.to_string(),
            distance_meters: segment.distance_meters,
            duration_minutes: segment.duration_minutes,
            mode: segment.mode,
            descriptive_steps: segment.descriptive_steps.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDto {
    pub total_duration_minutes: u64,
    pub total_distance_meters: u64,
    pub segment_count: usize,
}

impl From<RouteSummary> for SummaryDto {
    fn from(value: RouteSummary) -> Self {
        Self {
            total_duration_minutes: value.total_duration_minutes,
            total_distance_meters: value.total_distance_meters,
            segment_count: value.segment_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub segments: Vec<SegmentDto>,
    pub summary: SummaryDto,
}

impl RouteResponse {
    pub fn new(segments: &[RouteSegment], summary: RouteSummary) -> Self {
        Self {
            segments: segments.iter().map(SegmentDto::from).collect(),
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: String,
}
