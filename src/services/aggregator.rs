// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout filtering and statistics.
//!
//! Everything here is a pure function over an in-memory workout list.
//! Callers pass `today` explicitly so windows and daily series are
//! reproducible in tests.

use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::models::workout::UNKNOWN_LABEL;
use crate::models::{Category, DailyCalories, Intensity, StatisticsSummary, WorkoutRecord};
use crate::time_utils::format_day_month;

/// Daily series width used by the dashboard.
pub const DASHBOARD_SERIES_DAYS: u32 = 7;
/// Daily series width used by the detailed statistics view.
pub const DETAILED_SERIES_DAYS: u32 = 30;

/// Recency window for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    All,
    /// Trailing days counted back from today, inclusive on both ends.
    LastDays(u32),
}

impl FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Window::All);
        }
        s.parse::<u32>()
            .map(Window::LastDays)
            .map_err(|_| format!("Invalid period '{}': expected 'all' or a number of days", s))
    }
}

/// Filter criteria; all predicates are ANDed.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub window: Window,
    /// `None` matches every category.
    pub category: Option<Category>,
    /// Case-insensitive; blank matches everything.
    pub search: String,
}

/// Filter workouts and sort them most recent first.
///
/// The sort is stable, so workouts on the same date keep their storage order.
pub fn filter_workouts(
    workouts: &[WorkoutRecord],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<WorkoutRecord> {
    let window_start = match criteria.window {
        Window::All => None,
        Window::LastDays(days) => Some(
            today
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN),
        ),
    };
    let needle = criteria.search.trim().to_lowercase();

    let mut filtered: Vec<WorkoutRecord> = workouts
        .iter()
        .filter(|w| match window_start {
            Some(start) => w.date >= start && w.date <= today,
            None => true,
        })
        .filter(|w| criteria.category.is_none_or(|c| w.category == c))
        .filter(|w| needle.is_empty() || matches_search(w, &needle))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

fn matches_search(workout: &WorkoutRecord, needle: &str) -> bool {
    workout.notes.to_lowercase().contains(needle)
        || workout.category.label().to_lowercase().contains(needle)
}

/// Compute statistics over `workouts`, with a daily calorie series covering
/// the `series_days` days ending at `today`.
pub fn summarize(
    workouts: &[WorkoutRecord],
    today: NaiveDate,
    series_days: u32,
) -> StatisticsSummary {
    let total_workouts = workouts.len() as u32;
    let total_calories: u64 = workouts.iter().map(|w| u64::from(w.calories_burned)).sum();
    let total_duration_minutes: u64 = workouts
        .iter()
        .map(|w| u64::from(w.duration_minutes))
        .sum();
    let longest_workout = workouts
        .iter()
        .map(|w| w.duration_minutes)
        .max()
        .unwrap_or(0);

    let mut calories_by_category: BTreeMap<Category, u64> = BTreeMap::new();
    let mut workouts_by_category: BTreeMap<Category, u32> = BTreeMap::new();
    let mut duration_by_category: BTreeMap<Category, u64> = BTreeMap::new();
    for workout in workouts {
        *calories_by_category.entry(workout.category).or_insert(0) +=
            u64::from(workout.calories_burned);
        *workouts_by_category.entry(workout.category).or_insert(0) += 1;
        *duration_by_category.entry(workout.category).or_insert(0) +=
            u64::from(workout.duration_minutes);
    }

    let efficiency_by_category = calories_by_category
        .iter()
        .map(|(category, &calories)| {
            let minutes = duration_by_category.get(category).copied().unwrap_or(0);
            (*category, calories_per_minute(calories, minutes))
        })
        .collect();

    StatisticsSummary {
        total_workouts,
        total_calories,
        total_duration_minutes,
        total_hours: div_round_half_up(total_duration_minutes, 60),
        avg_duration: div_round_half_up(total_duration_minutes, u64::from(total_workouts)),
        avg_calories: div_round_half_up(total_calories, u64::from(total_workouts)),
        longest_workout,
        daily_calories: daily_calories(workouts, today, series_days),
        calories_by_category,
        workouts_by_category,
        efficiency_by_category,
        best_workout: best_workout(workouts).cloned(),
    }
}

/// One entry per day in the trailing window, oldest first, zero-filled.
fn daily_calories(workouts: &[WorkoutRecord], today: NaiveDate, days: u32) -> Vec<DailyCalories> {
    let mut by_date: HashMap<NaiveDate, u64> = HashMap::new();
    for workout in workouts {
        *by_date.entry(workout.date).or_insert(0) += u64::from(workout.calories_burned);
    }

    (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| DailyCalories {
            date,
            label: format_day_month(date),
            calories: by_date.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// The workout with the most calories; the earliest one wins ties.
pub fn best_workout(workouts: &[WorkoutRecord]) -> Option<&WorkoutRecord> {
    workouts.iter().fold(None, |best, workout| match best {
        Some(b) if b.calories_burned >= workout.calories_burned => Some(b),
        _ => Some(workout),
    })
}

/// Display label for a category key, or "Unknown".
pub fn category_label(key: &str) -> &'static str {
    key.parse::<Category>()
        .map(|c| c.label())
        .unwrap_or(UNKNOWN_LABEL)
}

/// Display label for an intensity key, or "Unknown".
pub fn intensity_label(key: &str) -> &'static str {
    key.parse::<Intensity>()
        .map(|i| i.label())
        .unwrap_or(UNKNOWN_LABEL)
}

/// Integer division rounding halves up. Zero divisor yields zero.
fn div_round_half_up(sum: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (2 * sum + count) / (2 * count)
}

/// Calories per minute rounded to one decimal place; zero minutes yields zero.
fn calories_per_minute(calories: u64, minutes: u64) -> f64 {
    if minutes == 0 {
        return 0.0;
    }
    (calories as f64 / minutes as f64 * 10.0).round() / 10.0
}
