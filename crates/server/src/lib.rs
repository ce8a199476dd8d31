mod api;
pub mod cache;
pub mod dto;
mod state;

pub use state::AppState;

use axum::routing::{get, post};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/stops", get(api::stops))
        .route("/route", post(api::route))
        .route("/optimize", post(api::optimize))
        .route("/schedule", post(api::schedule))
        .with_state(state)
}
