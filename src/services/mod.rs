// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;

pub use aggregator::{
    best_workout, category_label, filter_workouts, intensity_label, summarize, FilterCriteria,
    Window,
};
