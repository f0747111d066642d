//! # iqsf
//!
//! Backend for a country safety index and certification programme: a JSON
//! API over an in-memory store of countries, certification applications,
//! reports, users and memberships.
//!
//! ## Crates
//!
//! - [`iqsf_core`] - Default values and shared constants
//! - [`iqsf_model`] - Entities, insert shapes, closed enums and validation
//! - [`iqsf_store`] - Storage trait and the in-memory store
//! - [`iqsf_config`] - Configuration loading and validation
//! - [`iqsf_metrics`] - Prometheus-compatible metrics
//! - [`iqsf_server`] - HTTP API and serve loop

pub use iqsf_config as config;
pub use iqsf_core as core;
pub use iqsf_metrics as metrics;
pub use iqsf_model as model;
pub use iqsf_server as server;
pub use iqsf_store as store;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use iqsf_config::{Config, load_config, validate_config};
    pub use iqsf_model::{Validate, ValidationError};
    pub use iqsf_server::{
        AppState, CancellationToken, ServerError, build_router, run, run_with_shutdown,
    };
    pub use iqsf_store::{MemoryStore, Storage, StoreError};
}
