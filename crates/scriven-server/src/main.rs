//! Scriven Server
//!
//! Backend for the Scriven publishing platform - registration, writings,
//! votes, comments, engagement analytics, and ranked feeds, all served
//! from a single in-memory store.

mod error;
mod extractors;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use services::AuthService;
use storage::Store;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub auth_service: Arc<AuthService>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Scriven Server v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let config = load_config().context("Failed to load configuration")?;
    info!("Config loaded: bind={}", config.bind_address);

    // All state is in-memory and dies with the process; every start is a
    // fresh store preloaded with the sample data set.
    info!("Initializing in-memory store...");
    let store = Arc::new(Store::seeded());
    info!("Store initialized with sample data");

    let auth_service = Arc::new(AuthService::new(config.jwt_secret.clone()));

    let state = AppState {
        store,
        auth_service,
    };

    info!("Building HTTP router...");
    let app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/users/:id", get(handlers::users::profile))
        .route(
            "/users/:id/follow",
            post(handlers::users::follow).delete(handlers::users::unfollow),
        )
        .route(
            "/writings",
            get(handlers::writings::list).post(handlers::writings::create),
        )
        .route(
            "/writings/:id",
            get(handlers::writings::get)
                .put(handlers::writings::update)
                .delete(handlers::writings::delete),
        )
        .route("/writings/:id/vote", post(handlers::writings::vote))
        .route("/writings/:id/share", post(handlers::writings::share))
        .route("/writings/:id/comment", post(handlers::writings::comment))
        .route("/feed", get(handlers::feed::feed))
        .route("/analytics", get(handlers::analytics::analytics))
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
    jwt_secret: String,
}

fn load_config() -> Result<Config> {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        warn!("JWT_SECRET not set, using default (insecure for production)");
        "change-me-in-production".to_string()
    });

    Ok(Config {
        bind_address,
        jwt_secret,
    })
}
