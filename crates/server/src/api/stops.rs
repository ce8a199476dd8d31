use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{dto::StopDto, state::AppState};

/// Lists preloaded stops, optionally filtered by `q` (case-insensitive name
/// match) and capped by `count`.
pub async fn stops(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let count: usize = match params.get("count") {
        Some(value) => match value.parse() {
            Ok(value) => value,
            Err(_) => return Err(StatusCode::BAD_REQUEST),
        },
        None => usize::MAX,
    };
    let needle = params.get("q").map(|q| q.to_lowercase());
    let result: Vec<_> = state
        .stops
        .iter()
        .filter(|stop| match &needle {
            Some(needle) => stop.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .take(count)
        .map(StopDto::from)
        .collect();
    Ok(Json(result).into_response())
}
