//! Personal Site Backend
//!
//! Serves the static front-end and a small JSON API for blog posts, projects and
//! the contact form. Blog posts persist in a flat JSON file.

mod api;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use store::PostStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    tracing::info!("Starting personal site backend");
    tracing::info!("Static dir: {:?}", config.static_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Seed the backing file before serving
    let store = Arc::new(PostStore::new(config.data_path.clone()));
    tracing::info!("Data path: {:?}", store.path());
    store.ensure_initialized().await?;

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

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

    // Everything outside the API is served from disk; `/` maps to index.html
    let static_files = ServeDir::new(&state.config.static_dir);

    let api_routes = Router::new()
        // Blog
        .route("/blog", get(api::list_posts))
        .route("/blog", post(api::create_post))
        .route("/blog/{id}", get(api::get_post))
        // Contact
        .route("/contact", post(api::submit_contact))
        // Projects
        .route("/projects", get(api::list_projects));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
