//! IQSF API server library.
//!
//! This module exposes the router and serve loop for the binaries, for
//! integration tests and for embedding.

mod api;
pub mod cli;
mod error;
mod report;
mod server;
mod state;

pub use api::{Statistics, build_router};
pub use cli::ServerArgs;
pub use error::{ApiError, ServerError};
pub use report::{REPORT_SUMMARY, attachment_filename, default_title, snapshot_content};
pub use server::{run, run_with_shutdown};
pub use state::AppState;
pub use tokio_util::sync::CancellationToken;
