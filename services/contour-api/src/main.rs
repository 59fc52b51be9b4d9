//! Contour API Server
//!
//! Computes terrain contour lines inside a user-drawn boundary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use contour_api::config::ContourServiceConfig;
use contour_api::router::build_router;
use contour_api::state::AppState;

/// Contour API Server
#[derive(Parser, Debug)]
#[command(name = "contour-api")]
#[command(about = "Terrain contour lines for a drawn boundary")]
struct Args {
    /// Listen address (defaults to 0.0.0.0:$PORT, or 0.0.0.0:5000)
    #[arg(short, long, env = "CONTOUR_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "CONTOUR_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, default_value = "config/contour.yaml", env = "CONTOUR_CONFIG")]
    config: String,
}

impl Args {
    fn listen_addr(&self) -> String {
        match &self.listen {
            Some(addr) => addr.clone(),
            None => {
                let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
                format!("0.0.0.0:{}", port)
            }
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;
    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Starting contour API server");

    let config = ContourServiceConfig::load_from_file(&args.config)?;
    info!(
        divisions = config.contour.sampling.divisions,
        batch_size = config.provider.batch_size,
        max_concurrent_requests = config.limits.max_concurrent_requests,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::new(config)?.with_prometheus(prometheus_handle));
    let app = build_router(state);

    let addr: SocketAddr = args
        .listen_addr()
        .parse()
        .context("Invalid listen address")?;

    info!(address = %addr, "Contour API listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
