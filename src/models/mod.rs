// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod stats;
pub mod workout;

pub use stats::{DailyCalories, StatisticsSummary};
pub use workout::{Category, Intensity, NewWorkout, WorkoutRecord};
