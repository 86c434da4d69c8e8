// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::clock::SystemClock;
use crate::application::dashboard_service::DashboardService;
use crate::application::flight_controller::FlightController;
use crate::application::flight_service::FlightService;
use crate::domain::flight::DroneVitals;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::fixture_repository::TomlSeedRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    append_waypoint, current_mission, dashboard_snapshot, field_survey, flight_command, flight_state,
    health_check, list_alerts, list_defects, list_detections, list_insights, list_missions,
    list_waypoints, mark_alert_read, mark_all_alerts_read, remove_waypoint, select_mission,
    stream_flight_events, toggle_recording, weather,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(TomlSeedRepository::from_path(&config.seed.path).await?);

    // Create services (application layer)
    let flight_service = FlightService::new(
        FlightController::new(config.flight.clone(), DroneVitals::default()),
        Arc::new(SystemClock),
    );
    let dashboard_service =
        DashboardService::load(repository, config.planner.clone(), flight_service.clone()).await?;

    // Fire flight timers in the background
    let _ticker = flight_service.spawn_ticker(Duration::from_millis(config.flight.tick_interval_ms.max(1)));

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        flight_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(dashboard_snapshot))
        .route("/missions", get(list_missions))
        .route("/missions/current", get(current_mission))
        .route("/missions/:id/select", post(select_mission))
        .route("/waypoints", get(list_waypoints).post(append_waypoint))
        .route("/waypoints/:id", delete(remove_waypoint))
        .route("/insights", get(list_insights))
        .route("/alerts", get(list_alerts))
        .route("/alerts/read-all", post(mark_all_alerts_read))
        .route("/alerts/:id/read", post(mark_alert_read))
        .route("/detections", get(list_detections))
        .route("/defects", get(list_defects))
        .route("/agriculture/field", get(field_survey))
        .route("/weather", get(weather))
        .route("/flight", get(flight_state))
        .route("/flight/commands", post(flight_command))
        .route("/flight/recording", post(toggle_recording))
        .route("/flight/events", get(stream_flight_events))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting drone-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
