// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness Log: a personal workout tracker
//!
//! This crate stores logged workouts in a local key-value slot, computes
//! dashboard statistics over them, and serves both through a local JSON API.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::WorkoutStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: WorkoutStore,
}
