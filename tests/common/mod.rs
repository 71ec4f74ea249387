// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Days, NaiveDate};
use fitness_log::config::Config;
use fitness_log::db::{MemoryKvStore, WorkoutStore};
use fitness_log::routes::create_router;
use fitness_log::time_utils::today_local;
use fitness_log::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by in-memory storage.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store = WorkoutStore::new(Arc::new(MemoryKvStore::new()));
    let state = Arc::new(AppState { config, store });

    (create_router(state.clone()), state)
}

/// Like `create_test_app`, but also returns the backing slot storage so
/// tests can seed raw slot contents.
#[allow(dead_code)]
pub fn create_test_app_with_kv() -> (axum::Router, Arc<MemoryKvStore>) {
    let kv = Arc::new(MemoryKvStore::new());
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store: WorkoutStore::new(kv.clone()),
    });

    (create_router(state), kv)
}

/// Local date `days` days before today.
#[allow(dead_code)]
pub fn days_ago(days: u64) -> NaiveDate {
    today_local()
        .checked_sub_days(Days::new(days))
        .expect("date in range")
}

/// Send a request and decode the JSON body (Null for empty bodies).
#[allow(dead_code)]
pub async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST a workout and return the stored record.
#[allow(dead_code)]
pub async fn add_workout(
    app: &axum::Router,
    category: &str,
    date: NaiveDate,
    duration: u32,
    calories: u32,
    notes: &str,
) -> Value {
    let body = serde_json::json!({
        "type": category,
        "date": date.format("%Y-%m-%d").to_string(),
        "duration": duration,
        "calories": calories,
        "notes": notes,
    });
    let (status, json) = send(app, post_json("/api/workouts", &body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", json);
    json
}
