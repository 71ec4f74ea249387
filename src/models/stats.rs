//! Derived workout statistics.
//!
//! These are recomputed from the stored workouts on every request and
//! never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Category, WorkoutRecord};

/// Calories burned on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyCalories {
    pub date: NaiveDate,
    /// Short chart label ("dd.mm")
    pub label: String,
    pub calories: u64,
}

/// Statistics over a set of workouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatisticsSummary {
    // ─── Totals ──────────────────────────────────────────────────
    pub total_workouts: u32,
    pub total_calories: u64,
    pub total_duration_minutes: u64,
    /// Total duration in whole hours (rounded half up)
    pub total_hours: u64,

    // ─── Averages & Maxima ───────────────────────────────────────
    /// Mean duration in minutes (rounded half up)
    pub avg_duration: u64,
    /// Mean calories (rounded half up)
    pub avg_calories: u64,
    /// Longest single workout (minutes)
    pub longest_workout: u32,

    // ─── Time Series ─────────────────────────────────────────────
    /// One entry per day of the trailing window, oldest first
    pub daily_calories: Vec<DailyCalories>,

    // ─── By Category ─────────────────────────────────────────────
    /// Summed calories per category (present categories only)
    pub calories_by_category: BTreeMap<Category, u64>,
    /// Workout count per category (present categories only)
    pub workouts_by_category: BTreeMap<Category, u32>,
    /// Calories per minute per category, one decimal place
    pub efficiency_by_category: BTreeMap<Category, f64>,

    /// Workout with the most calories burned
    pub best_workout: Option<WorkoutRecord>,
}
