mod error;
mod handlers;
mod models;
mod resolver;
mod telephony;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telephony::TelephonyRpc;

pub struct AppState<T> {
    pub telephony: Arc<T>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            telephony: Arc::clone(&self.telephony),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cell_info_bridge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from env
    dotenvy::dotenv().ok();
    let telephony_url =
        std::env::var("TELEPHONY_URL").unwrap_or_else(|_| "http://127.0.0.1:9000".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    tracing::info!("Connecting to telephony service at {}", telephony_url);

    let telephony = Arc::new(TelephonyRpc::new(&telephony_url));
    let state = AppState { telephony };

    let app = Router::new()
        .route("/v1/cell_info", post(handlers::method_call::<TelephonyRpc>))
        .route("/v1/status", get(handlers::get_status::<TelephonyRpc>))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Bridge listening on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
