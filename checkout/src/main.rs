//! Checkout Service
//!
//! Validation gate run before an order is accepted: every shipping address
//! field must be confirmed by the field validation service and every cart
//! line must be in stock according to the product catalog.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{HttpFieldValidator, HttpProductCatalog};
use app::CheckoutService;
use config::Config;
use domain::ports::{FieldValidator, ProductCatalog};

/// Application state shared across all handlers
pub struct AppState<FV, PC>
where
    FV: FieldValidator,
    PC: ProductCatalog,
{
    pub checkout_service: Arc<CheckoutService<FV, PC>>,
    pub config: Config,
}

impl<FV, PC> Clone for AppState<FV, PC>
where
    FV: FieldValidator,
    PC: ProductCatalog,
{
    fn clone(&self) -> Self {
        Self {
            checkout_service: self.checkout_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for the given state
pub fn router<FV, PC>(state: AppState<FV, PC>) -> Router
where
    FV: FieldValidator + 'static,
    PC: ProductCatalog + 'static,
{
    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Protected routes
        .nest(
            "/api/checkout",
            Router::new()
                .route("/process", post(handlers::process_checkout::<FV, PC>))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::auth_middleware::<FV, PC>,
                )),
        )
        // Middleware
        // `Any` (`*`) never covers Authorization, so the headers are listed
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers([AUTHORIZATION, CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,checkout_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting checkout service...");

    // Load configuration
    let config = Config::from_env()?;

    // One pooled client shared by both adapters
    let mut http = reqwest::Client::builder();
    if let Some(timeout) = config.http_timeout {
        http = http.timeout(timeout);
    }
    let http = http.build().context("Failed to build HTTP client")?;

    // Create adapters
    let validator = Arc::new(HttpFieldValidator::with_client(
        http.clone(),
        config.validator_url.clone(),
    ));
    let catalog = Arc::new(HttpProductCatalog::with_client(
        http,
        config.catalog_url.clone(),
    ));
    tracing::info!(
        validator_url = %config.validator_url,
        catalog_url = %config.catalog_url,
        "Collaborators configured"
    );

    // Create application services
    let checkout_service = Arc::new(CheckoutService::new(validator, catalog));

    let state = AppState {
        checkout_service,
        config: config.clone(),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
