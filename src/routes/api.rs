// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout and statistics API routes.

use crate::db::WorkoutStore;
use crate::error::{AppError, Result};
use crate::models::{Category, Intensity, NewWorkout, StatisticsSummary, WorkoutRecord};
use crate::services::aggregator::{
    self, FilterCriteria, Window, DASHBOARD_SERIES_DAYS, DETAILED_SERIES_DAYS,
};
use crate::time_utils::today_local;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Longest accepted search string.
const MAX_SEARCH_LEN: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/workouts",
            get(list_workouts).post(create_workout).delete(clear_workouts),
        )
        .route("/api/workouts/{id}", axum::routing::delete(delete_workout))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/stats", get(get_stats))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{key}", get(get_category_label))
        .route("/api/intensities", get(list_intensities))
        .route("/api/intensities/{key}", get(get_intensity_label))
}

// ─── Query Parsing ───────────────────────────────────────────

fn default_all() -> String {
    "all".to_string()
}

fn default_stats_period() -> String {
    "30".to_string()
}

#[derive(Deserialize)]
struct WorkoutsQuery {
    /// "all" or a number of trailing days
    #[serde(default = "default_all")]
    period: String,
    /// "all" or a category key
    #[serde(rename = "type", default = "default_all")]
    category: String,
    #[serde(default)]
    search: String,
}

#[derive(Deserialize)]
struct StatsQuery {
    #[serde(default = "default_stats_period")]
    period: String,
    #[serde(rename = "type", default = "default_all")]
    category: String,
}

fn parse_criteria(period: &str, category: &str, search: String) -> Result<FilterCriteria> {
    let window = period.parse::<Window>().map_err(AppError::BadRequest)?;

    let category = match category {
        "all" => None,
        key => Some(key.parse::<Category>().map_err(AppError::BadRequest)?),
    };

    if search.chars().count() > MAX_SEARCH_LEN {
        return Err(AppError::BadRequest(format!(
            "Search text must be at most {} characters",
            MAX_SEARCH_LEN
        )));
    }

    Ok(FilterCriteria {
        window,
        category,
        search,
    })
}

/// Run a store operation on the blocking pool; slot I/O is synchronous.
async fn with_store<T, F>(state: &Arc<AppState>, op: F) -> Result<T>
where
    F: FnOnce(&WorkoutStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || op(&state.store))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Store task failed: {}", e)))?
}

// ─── Workouts ────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutsResponse {
    /// Matching workouts, most recent first
    pub workouts: Vec<WorkoutRecord>,
    pub total: u32,
}

/// Workout history with optional filtering.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WorkoutsQuery>,
) -> Result<Json<WorkoutsResponse>> {
    tracing::debug!(
        period = %params.period,
        category = %params.category,
        search = %params.search,
        "Fetching workouts"
    );

    let criteria = parse_criteria(&params.period, &params.category, params.search)?;
    let stored = with_store(&state, |store| Ok(store.list())).await?;
    let workouts = aggregator::filter_workouts(&stored, &criteria, today_local());

    Ok(Json(WorkoutsResponse {
        total: workouts.len() as u32,
        workouts,
    }))
}

/// Validate and store a new workout.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(workout): Json<NewWorkout>,
) -> Result<(StatusCode, Json<WorkoutRecord>)> {
    workout.validate()?;
    let record = with_store(&state, move |store| store.add(workout)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteWorkoutResponse {
    /// Whether a workout with that id existed
    pub deleted: bool,
}

/// Delete a single workout. Unknown ids are reported, not treated as errors.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteWorkoutResponse>> {
    let deleted = with_store(&state, move |store| store.delete(&id)).await?;
    Ok(Json(DeleteWorkoutResponse { deleted }))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ClearWorkoutsResponse {
    pub success: bool,
    pub message: String,
}

/// Remove every stored workout.
async fn clear_workouts(State(state): State<Arc<AppState>>) -> Result<Json<ClearWorkoutsResponse>> {
    with_store(&state, |store| store.clear()).await?;
    Ok(Json(ClearWorkoutsResponse {
        success: true,
        message: "All workouts removed.".to_string(),
    }))
}

// ─── Statistics ──────────────────────────────────────────────

/// Dashboard: all workouts, 7-day calorie series.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Result<Json<StatisticsSummary>> {
    let workouts = with_store(&state, |store| Ok(store.list())).await?;
    Ok(Json(aggregator::summarize(
        &workouts,
        today_local(),
        DASHBOARD_SERIES_DAYS,
    )))
}

/// Detailed statistics over a filtered set, 30-day calorie series.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatisticsSummary>> {
    let criteria = parse_criteria(&params.period, &params.category, String::new())?;
    let today = today_local();
    let stored = with_store(&state, |store| Ok(store.list())).await?;
    let workouts = aggregator::filter_workouts(&stored, &criteria, today);

    tracing::debug!(
        period = %params.period,
        category = %params.category,
        matched = workouts.len(),
        "Computing statistics"
    );

    Ok(Json(aggregator::summarize(
        &workouts,
        today,
        DETAILED_SERIES_DAYS,
    )))
}

// ─── Labels ──────────────────────────────────────────────────

#[derive(Serialize, Debug, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LabelEntry {
    pub key: String,
    pub label: String,
}

async fn list_categories() -> Json<Vec<LabelEntry>> {
    Json(
        Category::ALL
            .iter()
            .map(|c| LabelEntry {
                key: c.key().to_string(),
                label: c.label().to_string(),
            })
            .collect(),
    )
}

/// Label lookup; unknown keys resolve to "Unknown".
async fn get_category_label(Path(key): Path<String>) -> Json<LabelEntry> {
    let label = aggregator::category_label(&key).to_string();
    Json(LabelEntry { key, label })
}

async fn list_intensities() -> Json<Vec<LabelEntry>> {
    Json(
        Intensity::ALL
            .iter()
            .map(|i| LabelEntry {
                key: i.key().to_string(),
                label: i.label().to_string(),
            })
            .collect(),
    )
}

async fn get_intensity_label(Path(key): Path<String>) -> Json<LabelEntry> {
    let label = aggregator::intensity_label(&key).to_string();
    Json(LabelEntry { key, label })
}
