// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness Log API Server
//!
//! Serves the workout log and its statistics from a local data directory.

use fitness_log::{
    config::Config,
    db::{FileKvStore, WorkoutStore},
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Fitness Log API");

    // Open local storage
    let kv = FileKvStore::open(&config.data_dir)?;
    let store = WorkoutStore::new(Arc::new(kv));
    tracing::info!(
        workouts = store.list().len(),
        data_dir = %config.data_dir.display(),
        "Workout store ready"
    );

    // Build shared state
    let addr = SocketAddr::new(config.bind_addr, config.port);
    let state = Arc::new(AppState { config, store });

    // Build router
    let app = fitness_log::routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitness_log=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
