// Sun exposure API server
//
// Env: DATA_FILE (geometry snapshot JSON), PORT, RUST_LOG
// Usage: cargo run --features api --bin api_server

use std::net::SocketAddr;
use sun_exposure_rust::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "sun_exposure_rust=info,tower_http=debug,axum=debug,warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_file = std::env::var("DATA_FILE")
        .unwrap_or_else(|_| "data/sample_snapshot.json".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!(%data_file, port, "Starting sun exposure server");

    let app = create_router(AppState::new(&data_file)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
