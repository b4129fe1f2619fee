//! Groupie Tracker server
//!
//! Run with: cargo run -- --addr :8080
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the first of
//! `~/.config/groupie-tracker/config.toml`, `/etc/groupie-tracker/config.toml`,
//! `./config.toml`), then environment variables:
//! - `PORT`: Port to listen on (default: 8080)
//! - `GROUPIE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GROUPIE_API_BASE_URL`: Artist API base URL
//! - `GROUPIE_CACHE_TTL_SECS`: Snapshot freshness window (default: 1800)
//! - `GROUPIE_GEOCODE_URL`: Geocoding endpoint
//! - `GROUPIE_LOG_LEVEL`, `GROUPIE_LOG_FORMAT`: Logging (`RUST_LOG` wins over the level)

use anyhow::Context;
use clap::Parser;
use groupie_tracker::api::{serve, ApiConfig, AppState};
use groupie_tracker::catalog::{Catalog, SystemClock};
use groupie_tracker::config::{generate_default_config, Config, LoggingConfig};
use groupie_tracker::query::{Geocoder, GeocoderConfig, QueryService};
use groupie_tracker::upstream::{ReqwestTransport, UpstreamClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "groupie-tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse artists, concerts and tour maps from the groupie-tracker API")]
struct Args {
    /// Listen address, `host:port` or `:port`
    #[arg(long)]
    addr: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(addr) = &args.addr {
        config.server.apply_addr(addr)?;
    }

    init_logging(&config.logging);

    tracing::info!("Starting Groupie Tracker v{}", env!("CARGO_PKG_VERSION"));

    let upstream_transport = Arc::new(
        ReqwestTransport::new(config.upstream.request_timeout())
            .context("building upstream HTTP client")?,
    );
    let geocode_transport = Arc::new(
        ReqwestTransport::new(Some(config.geocoding.timeout()))
            .context("building geocoding HTTP client")?,
    );

    let client = UpstreamClient::new(upstream_transport, &config.upstream.base_url);
    let catalog = Arc::new(Catalog::with_clock(
        client,
        Arc::new(SystemClock),
        config.upstream.cache_ttl(),
    ));
    tracing::info!(
        base_url = %config.upstream.base_url,
        cache_ttl_secs = catalog.ttl().as_secs(),
        "Upstream API"
    );

    let geocoder = Arc::new(Geocoder::new(
        geocode_transport,
        GeocoderConfig {
            endpoint: config.geocoding.url.clone(),
            user_agent: config.geocoding.user_agent.clone(),
        },
    ));
    tracing::info!(
        endpoint = %geocoder.config().endpoint,
        user_agent = %geocoder.config().user_agent,
        "Geocoding"
    );

    let queries = Arc::new(QueryService::new(Arc::clone(&catalog), geocoder));

    // Warm the cache; the first request retries on failure
    let warm = Arc::clone(&catalog);
    tokio::spawn(async move {
        match warm.snapshot().await {
            Ok(snapshot) => tracing::info!(artists = snapshot.artists.len(), "Catalog loaded"),
            Err(e) => tracing::warn!("Initial catalog load failed: {}", e),
        }
    });

    let api_config = ApiConfig::from_config(&config);
    let state = AppState::new(queries, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Groupie Tracker stopped");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` takes priority over the
/// configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "groupie_tracker={},tower_http={}",
            logging.level, logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
