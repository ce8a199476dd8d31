use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use server::{
    AppState, app,
    dto::{ErrorDto, OptimizeResponse, RouteResponse, ScheduleResponse, StopDto},
};
use tower::ServiceExt;
use tripline::prelude::*;

fn preloaded() -> Vec<Stop> {
    vec![
        Stop::new("126508", "Gyeongbokgung", Coordinate::from((37.5796, 126.9770))),
        Stop::new("126512", "Deoksugung", Coordinate::from((37.5658, 126.9751))),
        Stop::new("264337", "N Seoul Tower", Coordinate::from((37.5512, 126.9882))),
    ]
}

fn test_app() -> axum::Router {
    app(Arc::new(AppState::new(RouteEstimator::new(), preloaded())))
}

fn post(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn seoul_payload(mode: &str) -> Value {
    json!({
        "mode": mode,
        "stops": [
            {"id": "A", "name": "Seoul City Hall", "coordinate": {"latitude": 37.5665, "longitude": 126.9780}},
            {"id": "B", "name": "Namsan Tower", "coordinate": {"latitude": 37.5512, "longitude": 126.9882}}
        ]
    })
}

#[tokio::test]
async fn route_endpoint_returns_segments() {
    let response = test_app()
        .oneshot(post("/route", seoul_payload("walk")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let route: RouteResponse = body(response).await;
    assert_eq!(route.segments.len(), 1);
    assert_eq!(route.segments[0].from_stop_id, "A");
    assert_eq!(route.segments[0].duration_minutes, 23);
    assert_eq!(route.segments[0].mode, TravelMode::Walk);
    assert_eq!(route.summary.segment_count, 1);
    assert_eq!(
        route.summary.total_distance_meters,
        route.segments[0].distance_meters as u64
    );
}

#[tokio::test]
async fn repeated_route_is_served_from_cache() {
    let state = Arc::new(AppState::new(RouteEstimator::new(), Vec::new()));
    let app = app(state.clone());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post("/route", seoul_payload("drive")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(state.route_cache.read().await.len(), 1);
}

#[tokio::test]
async fn unknown_mode_is_bad_request() {
    let response = test_app()
        .oneshot(post("/route", seoul_payload("teleport")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body(response).await;
    assert!(error.message.starts_with("unable to compute route"));
}

#[tokio::test]
async fn invalid_coordinate_is_bad_request() {
    let payload = json!({
        "mode": "transit",
        "stops": [
            {"id": "A", "coordinate": {"latitude": 37.5665, "longitude": 126.9780}},
            {"id": "B", "coordinate": {"latitude": 137.5512, "longitude": 126.9882}}
        ]
    });
    let response = test_app().oneshot(post("/route", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn optimize_endpoint_reorders() {
    let payload = json!({
        "stops": [
            {"id": "A", "coordinate": {"latitude": 37.5665, "longitude": 126.9780}},
            {"id": "B", "coordinate": {"latitude": 37.5796, "longitude": 126.9770}},
            {"id": "C", "coordinate": {"latitude": 37.5658, "longitude": 126.9751}}
        ]
    });
    let response = test_app().oneshot(post("/optimize", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let optimized: OptimizeResponse = body(response).await;
    let ids: Vec<&str> = optimized.stops.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "C", "B"]);
}

#[tokio::test]
async fn schedule_endpoint_plans_days() {
    let payload = json!({
        "mode": "walk",
        "start": "10:00:00",
        "dwell_minutes": 30,
        "days": [[
            {"id": "A", "name": "Seoul City Hall", "coordinate": {"latitude": 37.5665, "longitude": 126.9780}},
            {"id": "B", "name": "Namsan Tower", "coordinate": {"latitude": 37.5512, "longitude": 126.9882}}
        ], []]
    });
    let response = test_app().oneshot(post("/schedule", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let plan: ScheduleResponse = body(response).await;
    assert_eq!(plan.days.len(), 2);
    assert_eq!(plan.days[0].visits[1].arrival, "10:53:00");
    assert!(plan.days[1].visits.is_empty());
    assert_eq!(plan.summary.segment_count, 1);
}

#[tokio::test]
async fn schedule_rejects_bad_start() {
    let payload = json!({"mode": "walk", "start": "ten", "days": []});
    let response = test_app().oneshot(post("/schedule", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn schedule_rejects_start_past_last_time() {
    let payload = json!({"mode": "walk", "start": "4000000:00:00", "days": []});
    let response = test_app().oneshot(post("/schedule", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body(response).await;
    assert_eq!(error.message, "invalid start time 4000000:00:00");
}

#[tokio::test]
async fn schedule_rejects_oversized_dwell() {
    let payload = json!({"mode": "walk", "dwell_minutes": 4_000_000_000u32, "days": []});
    let response = test_app().oneshot(post("/schedule", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body(response).await;
    assert_eq!(error.message, "invalid dwell minutes 4000000000");
}

#[tokio::test]
async fn schedule_rejects_timeline_past_last_time() {
    let payload = json!({
        "mode": "walk",
        "start": "1193046:00:00",
        "days": [[
            {"id": "A", "coordinate": {"latitude": 37.5665, "longitude": 126.9780}},
            {"id": "B", "coordinate": {"latitude": 37.5512, "longitude": 126.9882}}
        ]]
    });
    let response = test_app().oneshot(post("/schedule", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body(response).await;
    assert!(error.message.starts_with("unable to plan schedule"));
}

#[tokio::test]
async fn missing_field_is_json_bad_request() {
    let response = test_app()
        .oneshot(post("/route", json!({"stops": []})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body(response).await;
    assert!(error.message.starts_with("invalid request body"));
    assert!(error.message.contains("mode"));
}

#[tokio::test]
async fn malformed_body_is_json_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/schedule")
        .header("content-type", "application/json")
        .body(Body::from("{\"mode\": "))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body(response).await;
    assert!(error.message.starts_with("invalid request body"));
}

#[tokio::test]
async fn stops_endpoint_filters_by_name() {
    let request = Request::builder()
        .uri("/stops?q=gung&count=1")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stops: Vec<StopDto> = body(response).await;
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].id, "126508");
}

#[tokio::test]
async fn stops_endpoint_rejects_bad_count() {
    let request = Request::builder()
        .uri("/stops?count=many")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
