mod route;
mod schedule;
mod stops;

pub use route::*;
pub use schedule::*;
pub use stops::*;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;
use tripline::estimator;

use crate::dto::ErrorDto;

/// Every failure the API reports is a bad request with a short message.
pub struct ApiError(String);

impl ApiError {
    pub fn from_message(message: String) -> Self {
        warn!("Rejected request: {message}");
        Self(message)
    }
}

impl From<estimator::Error> for ApiError {
    fn from(err: estimator::Error) -> Self {
        warn!("Unable to compute route: {err}");
        Self(format!("unable to compute route: {err}"))
    }
}

impl From<tripline::schedule::Error> for ApiError {
    fn from(err: tripline::schedule::Error) -> Self {
        match err {
            tripline::schedule::Error::Estimator(err) => err.into(),
            err => {
                warn!("Unable to plan schedule: {err}");
                Self(format!("unable to plan schedule: {err}"))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_message(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto { message: self.0 })).into_response()
    }
}
