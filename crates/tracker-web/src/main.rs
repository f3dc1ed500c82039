//! Web server for the player activity dashboard
#![forbid(unsafe_code)]

use clap::{Parser, ValueEnum};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracker_core::{Config, LogFormat, context_error, context_error::Result, init_logging};
use tracker_web::build_app;

/// Command line interface for the dashboard server
#[derive(Parser, Debug)]
#[command(
    name = "tracker-web-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "Player activity dashboard web server"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON dataset to display instead of the built-in demo
    #[arg(short, long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    log_format: Option<LogFormatArg>,
}

/// Log formats selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    /// One JSON object per line
    Json,
    /// Human readable output
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Pretty => Self::Pretty,
        }
    }
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dataset) = self.dataset {
            config.dashboard.dataset_path = Some(dataset);
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format.into();
        }
    }
}

/// Pick the configuration to start with
///
/// An explicit `--config` file must load. Failures of the implicit `config`
/// file fall back to defaults and are returned for logging once logging is up.
fn resolve_config(
    loaded: tracker_core::Result<Config>,
    explicit: Option<&Path>,
) -> Result<(Config, Option<tracker_core::Error>)> {
    match (loaded, explicit) {
        (Ok(config), _) => Ok((config, None)),
        (Err(e), Some(path)) => Err(context_error!(
            "Failed to load config {}: {}",
            path.display(),
            e
        )),
        (Err(e), None) => Ok((Config::default(), Some(e))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    let loaded = Config::load_from(cli.config.as_deref());
    let (mut config, load_error) = resolve_config(loaded, cli.config.as_deref())?;
    cli.apply(&mut config);

    // Logging settings may come from the file, so report load failures afterwards
    init_logging(&config.logging.level, config.logging.format)?;
    if let Some(e) = load_error {
        warn!("Failed to load config ({}), using defaults", e);
    }

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| context_error!("Invalid server address: {}", e))?;

    let app = build_app(config.clone()).map_err(|e| {
        error!("Failed to prepare dashboard: {}", e);
        context_error!("Startup failed: {}", e)
    })?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| context_error!("Failed to bind to {}: {}", addr, e))?;

    info!(
        "Starting {} v{} on http://{}",
        config.dashboard.title,
        env!("CARGO_PKG_VERSION"),
        addr
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| context_error!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
