//! foodpick-api - restaurant discovery query service
//!
//! Serves the venue list, filter vocabularies, a filtered random pick and
//! collection statistics from a read-only venue database.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use foodpick_common::config::{self, TomlConfig};
use foodpick_api::db::{self, SqliteVenueStore};
use foodpick_api::{build_router, AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for foodpick-api
#[derive(Parser, Debug)]
#[command(name = "foodpick-api")]
#[command(about = "Restaurant discovery query service")]
#[command(version)]
struct Args {
    /// Port to listen on [default: 5730]
    #[arg(short, long, env = "FOODPICK_PORT")]
    port: Option<u16>,

    /// Address to bind [default: 127.0.0.1]
    #[arg(short, long, env = "FOODPICK_BIND")]
    bind: Option<String>,

    /// Venue database file (overrides FOODPICK_DATABASE and the config file)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Config file [default: <config dir>/foodpick/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "foodpick_api=info,foodpick_common=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification before any database work
    info!(
        "Starting foodpick-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let toml_config = TomlConfig::load_or_default(args.config.as_deref());
    let settings = toml_config.service_settings();
    info!(
        "Settings: list_cap={} page_size={} top_limit={} exclude_unrated_from_mean={}",
        settings.list_cap,
        settings.page_size,
        settings.top_limit,
        settings.exclude_unrated_from_mean
    );

    let db_path =
        config::resolve_database_path(args.database.as_deref(), config::DATABASE_ENV, &toml_config);
    info!("Venue database: {}", db_path.display());

    let state = if db_path.exists() {
        let pool = match db::connect_readonly(&db_path).await {
            Ok(pool) => {
                info!("✓ Connected to venue database (read-only)");
                pool
            }
            Err(e) => {
                error!("Failed to connect to venue database: {:#}", e);
                return Err(e);
            }
        };
        AppState::new(Arc::new(SqliteVenueStore::new(pool)), settings)
    } else {
        warn!(
            "Venue database not found at {}; data endpoints will report a configuration error",
            db_path.display()
        );
        AppState::unconfigured(settings)
    };

    let app = build_router(state);

    let bind = args
        .bind
        .or(toml_config.bind)
        .unwrap_or_else(|| config::DEFAULT_BIND.to_string());
    let port = args.port.or(toml_config.port).unwrap_or(config::DEFAULT_PORT);
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", bind, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("foodpick-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
