//! Configuration loading, CLI overrides and validation.
//!
//! A config file is optional: [`Config::default`] is a runnable
//! configuration, and every field can be overridden from the command line.
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:5000"
//!
//! [store]
//! seed_sample_data = false
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

mod cli;
mod defaults;
mod loader;
mod types;
mod validate;

pub use cli::{CliOverrides, apply_overrides};
pub use loader::{ConfigError, load_config};
pub use types::{Config, LoggingConfig, MetricsConfig, ServerConfig, StoreConfig};
pub use validate::validate_config;
