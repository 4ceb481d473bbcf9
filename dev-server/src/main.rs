//! Development server for Marquee UI development
//!
//! This binary runs the catalog api with sample data on a fixed port so the
//! frontend can be developed against a live endpoint.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use api::catalog::Catalog;
use tracing::info;

const DEV_PORT: u16 = 8081;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber);

    info!("Starting Marquee development server");

    let app = test_helpers::spawn_app_on_port_with_catalog(
        DEV_PORT,
        Catalog::sample(),
    )
    .await;

    info!("API server running on http://127.0.0.1:{}", app.port);
    info!(
        "UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("Shutting down development server");
    Ok(())
}
