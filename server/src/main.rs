//! dashbadge server
//!
//! Renders the role and status badge components server-side and serves
//! them as a gallery page, embeddable HTML fragments and a JSON listing.

use clap::Parser;
use tracing::info;

mod config;
mod routes;
mod state;
mod ui;

use config::Config;
use state::AppState;

/// dashbadge preview server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to bind to
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "DASHBADGE_ADDR")]
    addr: String,

    /// Path to configuration file
    #[arg(short, long, env = "DASHBADGE_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dashbadge_server=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI args
    let args = Args::parse();

    // Load configuration
    let config = Config::load(args.config.as_deref())?;
    info!(
        addr = %args.addr,
        theme = config.theme.as_str(),
        "Starting dashbadge server"
    );

    let state = AppState::new(config);

    // Build Axum router
    let app = routes::app_routes(state)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        .layer(tower_http::compression::CompressionLayer::new());

    // Start server
    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    info!(addr = %args.addr, "Server listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
