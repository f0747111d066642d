//! Main serve loop.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use iqsf_config::Config;
use iqsf_metrics::set_countries_stored;
use iqsf_store::Storage;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::api::build_router;
use crate::error::ServerError;
use crate::state::AppState;

/// Bind `config.server.listen` and serve until `shutdown` is cancelled.
///
/// After cancellation, in-flight requests get `shutdown_timeout_secs` to
/// finish before the loop returns anyway.
pub async fn run_with_shutdown(
    config: Config,
    store: Arc<dyn Storage>,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let listen: SocketAddr = config
        .server
        .listen
        .parse()
        .map_err(|_| ServerError::Config("invalid listen address".into()))?;

    set_countries_stored(store.all_countries().await?.len());

    let app = build_router(AppState::new(store), &config.server);
    let listener = TcpListener::bind(listen).await?;
    info!(address = %listener.local_addr()?, "listening");

    let signal = shutdown.clone();
    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(async move { signal.cancelled().await })
        .into_future();
    tokio::pin!(serve);

    tokio::select! {
        res = &mut serve => res?,
        _ = shutdown.cancelled() => {
            let grace = Duration::from_secs(config.server.shutdown_timeout_secs);
            info!(timeout_secs = grace.as_secs(), "shutdown signal received, draining requests");
            match tokio::time::timeout(grace, &mut serve).await {
                Ok(res) => res?,
                Err(_) => warn!("shutdown timeout, dropping in-flight requests"),
            }
        }
    }

    info!("server stopped");
    Ok(())
}

/// Run the server until the process is killed.
pub async fn run(config: Config, store: Arc<dyn Storage>) -> Result<(), ServerError> {
    run_with_shutdown(config, store, CancellationToken::new()).await
}
