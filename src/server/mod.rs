mod handlers;
mod state;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, CorsLayer};

use crate::config::AppConfig;
use state::AppState;

/// Build the relay router. Public so integration tests can serve it against
/// fake provider endpoints.
pub fn build_router(config: AppConfig) -> Router {
    let cors = cors_layer(config.allowed_origin.as_deref());
    let state = Arc::new(AppState { config });

    Router::new()
        .route("/api/scrap", post(handlers::scrap))
        .route("/api/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// A configured frontend origin gets an exact-origin policy with credentials,
/// matching what the frontend deployment expects. No origin means permissive.
fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let Some(origin) = allowed_origin else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([
                Method::GET,
                Method::PUT,
                Method::POST,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
        Err(_) => {
            eprintln!(
                "Warning: FRONTEND_ORIGIN '{}' is not a valid header value; CORS is permissive",
                origin
            );
            CorsLayer::permissive()
        }
    }
}

pub async fn start(config: AppConfig) {
    let addr = format!("{}:{}", config.host, config.port);
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  maps-relay listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
