mod config;
mod errors;
mod middleware;
mod routes;
mod server;
mod state;

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::server::{bind_listener, listen_addr, shutdown_signal};
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // .env must be applied before anything reads the environment
    let env_file = config::load_env_file();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info");
            error!("Invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.rust_log);

    match env_file {
        Some(path) => info!("Loaded environment from {}", path.display()),
        None => info!("No .env file found"),
    }

    if let Err(e) = run(config).await {
        error!("Server failed to start: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(config: Config) -> Result<()> {
    info!("Starting greeter API v{}", env!("CARGO_PKG_VERSION"));

    let addr = listen_addr(config.port)?;
    let listener = bind_listener(addr).await?;

    let app = build_router(AppState { config });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(rust_log: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={rust_log},tower_http={rust_log}",
                env!("CARGO_PKG_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
