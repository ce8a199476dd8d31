use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use tracing::debug;
use tripline::prelude::*;

use crate::{
    api::ApiError,
    cache::RouteKey,
    dto::{OptimizeRequest, OptimizeResponse, RouteRequest, RouteResponse, StopDto},
    state::AppState,
};

pub async fn route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let mode: TravelMode = request.mode.parse()?;
    let key = RouteKey::new(mode, &request.stops);
    if let Some(cached) = state.route_cache.read().await.get(&key) {
        debug!("Serving route for {} stops from cache", request.stops.len());
        return Ok(Json(cached).into_response());
    }

    let stops: Vec<Stop> = request.stops.into_iter().map(StopDto::into_stop).collect();
    let segments = state.estimator.compute_route(&stops, mode)?;
    let summary = state.estimator.summarize_route(&segments);
    let response = RouteResponse::new(&segments, summary);
    state
        .route_cache
        .write()
        .await
        .insert(key, response.clone());
    Ok(Json(response).into_response())
}

pub async fn optimize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let stops: Vec<Stop> = request.stops.into_iter().map(StopDto::into_stop).collect();
    let ordered = state.estimator.optimize_stop_order(&stops)?;
    let response = OptimizeResponse {
        stops: ordered.iter().map(StopDto::from).collect(),
    };
    Ok(Json(response).into_response())
}
