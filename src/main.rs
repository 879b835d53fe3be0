//! Hello Work API entry point.
//!
//! Captures the process start time, initializes tracing, loads configuration,
//! sets up the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_work::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use hello_work::http::start_server;
use hello_work::{create_router, AppState, StatusReporter};

/// Hello Work API: greeting and process status over HTTP
#[derive(Parser, Debug)]
#[command(name = "hello-work", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_work=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Uptime counts from here
    let reporter = StatusReporter::start();

    let args = Args::parse();

    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        config = args.config.as_deref().unwrap_or("<defaults>"),
        version = env!("CARGO_PKG_VERSION"),
        "Loaded configuration"
    );
    tracing::info!(
        pid = reporter.pid(),
        started_at = %reporter.started_at().to_rfc3339(),
        "Process started"
    );

    let app = create_router(AppState::new(reporter));

    start_server(app, &config.http).await?;

    Ok(())
}
