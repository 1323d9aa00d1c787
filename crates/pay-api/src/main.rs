//! # Pay Gateway
//!
//! Session-validated payment endpoint.
//!
//! ## Usage
//!
//! ```bash
//! # Point at the Redis instance holding session records
//! export REDIS_ADDR=localhost:6379
//!
//! # Run the server
//! pay-gateway
//! ```

use pay_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // Initialize logging
    init_tracing(config.log_format);

    // Print banner
    print_banner();

    let addr = config.socket_addr()?;
    let is_prod = config.is_production();

    info!("Environment: {}", config.environment);

    // Connect to the session store; an unreachable store at boot is fatal
    let state = AppState::connect(config).await?;
    if let Err(e) = state.check_store().await {
        error!("Could not connect to session store: {}", e);
        return Err(e.into());
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Pay Gateway listening on http://{}", addr);

    if !is_prod {
        info!("💳 Payment: POST http://{}/process-payment", addr);
        info!("📝 Health: GET http://{}/health", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

fn print_banner() {
    println!(
        r#"
  💳 Pay Gateway 💳
  ━━━━━━━━━━━━━━━━━━━━━━━
  Session-validated payments
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
