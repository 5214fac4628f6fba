//! Policy engine service binary.
//!
//! Builds the policy code registry, assembles the axum router, and serves
//! it with CORS and request tracing. A malformed registry entry aborts
//! startup; it must never surface at request time.

use std::net::SocketAddr;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use policy_engine::api::{AppState, create_router};
use policy_engine::registry::CodeRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("policy_engine=info,tower_http=info")),
        )
        .init();

    let registry = CodeRegistry::builtin()?;
    info!(codes = registry.len(), "Policy code registry loaded");

    let state = AppState::new(registry);
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        // The API fronts a browser SPA; mirror its permissive CORS policy.
        .layer(CorsLayer::permissive());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Policy engine listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
