use api::{
    Config, build,
    catalog::Catalog,
    telemetry::{get_subscriber, init_subscriber},
};

/// Marquee catalog API server
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root.
///
/// Recognized environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port (defaults to 8081)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or
///   comma-separated list for production)
///
/// Example development command:
/// cargo run -p api
///
/// Example production command:
/// IP_ADDRESS=0.0.0.0 PORT=8081 ALLOWED_ORIGINS=https://app.example.com \
/// cargo run -p api
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from a .env file if available; silently
    // ignored when the file doesn't exist.
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env();
    let server = build(&mut config, Catalog::sample()).await?;
    tracing::info!("listening on {}:{}", config.ip, config.port);
    server.await
}
