use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use tripline::prelude::*;

use crate::{
    api::ApiError,
    dto::{ScheduleRequest, ScheduleResponse, StopDto},
    state::AppState,
};

pub async fn schedule(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let mode: TravelMode = request.mode.parse()?;
    let mut planner = DayPlanner::new(&state.estimator, mode).optimize(request.optimize);
    match request.start.as_deref() {
        None => {}
        Some("now") => planner = planner.starting_at(Time::now()),
        Some(start) => {
            let start = Time::from_hms(start)
                .ok_or_else(|| ApiError::from_message(format!("invalid start time {start}")))?;
            planner = planner.starting_at(start);
        }
    }
    if let Some(minutes) = request.dwell_minutes {
        let dwell = Duration::from_minutes(minutes)
            .ok_or_else(|| ApiError::from_message(format!("invalid dwell minutes {minutes}")))?;
        planner = planner.dwell(dwell);
    }

    let days: Vec<Vec<Stop>> = request
        .days
        .into_iter()
        .map(|day| day.into_iter().map(StopDto::into_stop).collect())
        .collect();
    let trip = planner.plan_trip(&days)?;
    Ok(Json(ScheduleResponse::from(&trip)).into_response())
}
