//! Unified iqsf CLI.
//!
//! This binary provides a unified interface to the IQSF service:
//! - `iqsf server` - Run the API server
//! - `iqsf check-config` - Validate a configuration and print the effective settings
//!
//! The server can also be run as the standalone `iqsf-server` binary.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// IQSF unified CLI.
#[derive(Parser)]
#[command(
    name = "iqsf",
    version,
    about = "Country safety data and certification service",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server.
    #[command(name = "server", alias = "serve")]
    Server(Box<iqsf_server::ServerArgs>),

    /// Load, override and validate a configuration, then print it as TOML.
    #[command(name = "check-config")]
    CheckConfig(Box<iqsf_server::ServerArgs>),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Server(args) => iqsf_server::cli::run(*args).await,
        Commands::CheckConfig(args) => check_config(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn check_config(args: &iqsf_server::ServerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = iqsf_server::cli::effective_config(args)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
