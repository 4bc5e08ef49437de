// LogLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and validation
// 3. Logging initialisation (debug mode support)
// 4. State restore and HTTP server launch

use clap::Parser;
use loglens::app::service::LogService;
use loglens::app::state::ActiveFile;
use loglens::platform::config::{self, AppConfig, RawConfig};
use loglens::util::{constants, logging};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(
    name = "loglens",
    version,
    about = "Upload-and-explore analytics for Tomcat-style application logs"
)]
struct Cli {
    /// Path to config.toml (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:8080 (overrides config)
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Log storage directory (overrides config)
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // An explicit --config path must load; the implicit ./config.toml is
    // optional and its absence just means built-in defaults.
    let raw = match &cli.config {
        Some(path) => match config::load_raw(path) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let default = PathBuf::from(constants::CONFIG_FILE_NAME);
            if default.exists() {
                match config::load_raw(&default) {
                    Ok(raw) => raw,
                    Err(e) => {
                        eprintln!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                RawConfig::default()
            }
        }
    };

    let app_config = match AppConfig::resolve(raw, cli.listen, cli.log_dir) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.debug, app_config.log_level.as_deref());

    let state = ActiveFile::restore(app_config.pointer_file());
    let service = Arc::new(LogService::new(state, app_config.log_directory.clone()));
    let app = loglens::http::router(service, app_config.max_upload_bytes);

    let listener = match tokio::net::TcpListener::bind(app_config.listen).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %app_config.listen, error = %e, "Failed to bind listen address");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        addr = %app_config.listen,
        log_dir = %app_config.log_directory.display(),
        "LogLens listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
