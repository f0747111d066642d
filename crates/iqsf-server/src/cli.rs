//! CLI module for iqsf-server.
//!
//! This module provides the command-line interface that can be used either
//! as a standalone binary or as a subcommand of the main iqsf CLI.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use iqsf_config::{
    CliOverrides, Config, ConfigError, LoggingConfig, apply_overrides, load_config,
    validate_config,
};
use iqsf_store::MemoryStore;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{CancellationToken, run_with_shutdown};

/// IQSF server CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "iqsf-server", version, about = "IQSF data service")]
pub struct ServerArgs {
    /// Config file path (json/jsonc/yaml/toml); built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Load the config file (if any), apply CLI overrides and validate.
pub fn effective_config(args: &ServerArgs) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args.overrides);
    validate_config(&config)?;
    Ok(config)
}

/// Run the server with the given arguments.
///
/// This is the main entry point for the server CLI, used by both the
/// standalone binary and the unified iqsf CLI.
pub async fn run(args: ServerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = effective_config(&args)?;

    init_tracing(&config.logging);
    info!(
        version = iqsf_core::VERSION,
        listen = %config.server.listen,
        "starting {}",
        iqsf_core::PROJECT_NAME
    );

    if let Some(listen) = &config.metrics.listen {
        match iqsf_metrics::init_prometheus(listen) {
            Ok(()) => info!("metrics exporter listening on {}", listen),
            Err(e) => warn!("failed to start metrics exporter: {}", e),
        }
    }

    // Set up graceful shutdown on SIGTERM/SIGINT
    let shutdown = CancellationToken::new();
    let shutdown_signal = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal_handler().await;
        info!("shutdown signal received");
        shutdown_signal.cancel();
    });

    let store = if config.store.seed_sample_data {
        MemoryStore::seeded()
    } else {
        info!("starting with an empty store");
        MemoryStore::new()
    };

    run_with_shutdown(config, Arc::new(store), shutdown).await?;
    Ok(())
}

/// Wait for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal_handler() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

/// Initialize tracing subscriber with the given logging configuration.
///
/// Supports:
/// - `level`: Base log level (trace, debug, info, warn, error)
/// - `format`: Output format (json, pretty, compact). Default: pretty
/// - `output`: Output target (stdout, stderr). Default: stderr
/// - `filters`: Per-module log level overrides
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(filter_directives(config))
        .unwrap_or_else(|_| EnvFilter::new(iqsf_core::defaults::DEFAULT_LOG_LEVEL));

    let format = config
        .format
        .as_deref()
        .unwrap_or(iqsf_core::defaults::DEFAULT_LOG_FORMAT);
    let output = config
        .output
        .as_deref()
        .unwrap_or(iqsf_core::defaults::DEFAULT_LOG_OUTPUT);

    match (format, output) {
        ("json", "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stdout))
                .init();
        }
        ("json", _) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        ("compact", "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stdout))
                .init();
        }
        ("compact", _) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
        (_, "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stdout))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}

/// `EnvFilter` directives: the base level, then per-module overrides in
/// name order.
fn filter_directives(config: &LoggingConfig) -> String {
    let mut directives = config
        .level
        .as_deref()
        .unwrap_or(iqsf_core::defaults::DEFAULT_LOG_LEVEL)
        .to_string();

    let mut modules: Vec<_> = config.filters.iter().collect();
    modules.sort();
    for (module, level) in modules {
        directives.push(',');
        directives.push_str(module);
        directives.push('=');
        directives.push_str(level);
    }
    directives
}
