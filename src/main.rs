//! Employee Gateway
//!
//! A REST gateway exposing employee CRUD operations by proxying the upstream
//! mock employee API and unwrapping its `{"data": ...}` response envelope.

mod api;
mod client;
mod config;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use client::EmployeeClient;
use config::Config;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<EmployeeClient>,
    pub config: Arc<Config>,
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

    tracing::info!("Starting Employee Gateway");
    tracing::info!("Upstream URL: {}", config.upstream_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Construct the upstream HTTP client explicitly; handlers receive it
    // through AppState rather than a global singleton.
    let http = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .build()?;
    let client = Arc::new(EmployeeClient::new(http, config.upstream_url.clone()));

    // Create application state
    let state = AppState {
        client,
        config: Arc::new(config.clone()),
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

    // Static segments take priority over {id}, so the derived-operation
    // routes coexist with the single-resource route.
    let employee_routes = Router::new()
        .route("/employee", get(api::list_employees))
        .route("/employee", post(api::create_employee))
        .route("/employee/search/{fragment}", get(api::search_employees_by_name))
        .route("/employee/highestSalary", get(api::highest_salary))
        .route(
            "/employee/topTenHighestEarningEmployeeNames",
            get(api::top_earner_names),
        )
        .route("/employee/{id}", get(api::get_employee))
        .route("/employee/{id}", delete(api::delete_employee));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(employee_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
