//! RutaBus Backend
//!
//! REST backend for the school-bus route demo application: roster CRUD,
//! email-to-role login, commune route derivation, the trip timer and the
//! incident report log, persisted in a SQLite-backed key-value store.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod reports;
mod routes;
mod trips;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionManager;
use config::Config;
use db::{KvStore, RosterRepository};
use reports::ReportLog;
use routes::{Geocoder, PlaceholderGeocoder};
use trips::TripTimer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterRepository>,
    pub sessions: Arc<SessionManager>,
    pub trips: Arc<TripTimer>,
    pub reports: Arc<ReportLog>,
    pub geocoder: Arc<dyn Geocoder>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RutaBus Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize storage
    let pool = db::init_database(&config.db_path).await?;
    let store = KvStore::new(pool);

    // Wire up the components
    let roster = Arc::new(RosterRepository::new(store.clone()));
    let sessions = Arc::new(SessionManager::new(store.clone()));
    let trips = Arc::new(TripTimer::new(store.clone()));
    let reports = Arc::new(ReportLog::new(store, trips.clone()));

    // Pick up a trip that was running when the process last stopped
    trips.resume().await?;

    let state = AppState {
        roster,
        sessions,
        trips,
        reports,
        geocoder: Arc::new(PlaceholderGeocoder),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Login and session
        .route("/login", post(api::login))
        .route("/session", get(api::get_session))
        .route("/session", delete(api::clear_session))
        // Roster
        .route("/roster", get(api::get_roster))
        // Students
        .route("/students", get(api::list_students))
        .route("/students", post(api::create_student))
        .route("/students/{id}", put(api::update_student))
        .route("/students/{id}", delete(api::delete_student))
        // Drivers
        .route("/drivers", get(api::list_drivers))
        .route("/drivers", post(api::create_driver))
        .route("/drivers/{id}", put(api::update_driver))
        .route("/drivers/{id}", delete(api::delete_driver))
        // School sites
        .route("/sites", get(api::list_sites))
        .route("/sites", post(api::create_site))
        .route("/sites/{id}", put(api::update_site))
        .route("/sites/{id}", delete(api::delete_site))
        // Buses
        .route("/buses", get(api::list_buses))
        .route("/buses", post(api::create_bus))
        .route("/buses/{index}", put(api::update_bus))
        .route("/buses/{index}", delete(api::delete_bus))
        // Derived routes
        .route("/routes", get(api::list_routes))
        .route("/routes/{comuna}/map", get(api::route_map))
        .route("/driver/route", get(api::get_driver_route))
        .route("/parent/children", get(api::get_parent_children))
        // Trip timer
        .route("/trip", get(api::get_trip))
        .route("/trip/start", post(api::start_trip))
        .route("/trip/finish", post(api::finish_trip))
        // Incident reports
        .route("/reports", get(api::list_reports))
        .route("/reports", post(api::create_report))
        .route("/reports/{id}", delete(api::delete_report))
        // Dashboards
        .route("/dashboard", get(api::get_dashboard))
        .route("/dashboard/demo", get(api::get_demo_dashboard));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
