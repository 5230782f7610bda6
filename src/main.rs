//! BKT outcome unwind service.
//!
//! Main entry point. Initializes logging, loads configuration, and serves
//! the unwind API until a shutdown signal arrives.

use std::time::Duration;

use anyhow::Result;
use tracing::info;
use unwind_api::Config;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting BKT outcome unwind service");

    let config = Config::load()?;
    let addr = config.parse_server_addr()?;
    info!(
        addr = %addr,
        request_timeout_secs = config.request_timeout,
        "Configuration loaded"
    );

    unwind_api::start_server(addr, Duration::from_secs(config.request_timeout)).await?;

    info!("BKT outcome unwind shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,unwind=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
