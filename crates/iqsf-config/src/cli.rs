//! CLI override definitions and application logic.

use clap::Parser;

use crate::Config;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override HTTP listen address, e.g. 0.0.0.0:5000
    #[arg(long)]
    pub listen: Option<String>,
    /// Override maximum request body size (bytes)
    #[arg(long)]
    pub max_body_bytes: Option<usize>,
    /// Override graceful shutdown timeout (seconds)
    #[arg(long)]
    pub shutdown_timeout_secs: Option<u64>,
    /// Start with an empty store instead of the sample countries
    #[arg(long)]
    pub no_seed: bool,
    /// Override metrics listen address
    #[arg(long)]
    pub metrics_listen: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Override log format (json/pretty/compact)
    #[arg(long)]
    pub log_format: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.listen {
        config.server.listen = v.clone();
    }
    if let Some(v) = overrides.max_body_bytes {
        config.server.max_body_bytes = v;
    }
    if let Some(v) = overrides.shutdown_timeout_secs {
        config.server.shutdown_timeout_secs = v;
    }
    if overrides.no_seed {
        config.store.seed_sample_data = false;
    }
    if let Some(v) = &overrides.metrics_listen {
        config.metrics.listen = Some(v.clone());
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
    if let Some(v) = &overrides.log_format {
        config.logging.format = Some(v.clone());
    }
}
