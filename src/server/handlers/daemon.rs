use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::server::proto::{DaemonInfo, GetDaemonInfoRequest, ShutdownRequest, ShutdownResponse};
use crate::server::{SharedStore, ShutdownSignal};
use crate::utils::{format_display_path, APP_VERSION};
use tokio::sync::watch;
use tonic::{Response, Status};
use tracing::info;

pub async fn get_daemon_info(
    store: &SharedStore,
    exe_path: Option<&Path>,
    _req: GetDaemonInfoRequest,
) -> Result<Response<DaemonInfo>, Status> {
    let binary_path = exe_path.map_or_else(String::new, |p| {
        format_display_path(&p.to_string_lossy())
    });
    let item_count = u64::try_from(store.read().await.len()).unwrap_or(u64::MAX);

    Ok(Response::new(DaemonInfo {
        version: APP_VERSION.to_string(),
        binary_path,
        item_count,
    }))
}

#[allow(
    renamed_and_removed_lints,
    unknown_lints,
    unused_async,
    clippy::unused_async
)]
pub async fn shutdown(
    req: ShutdownRequest,
    shutdown_tx: &Arc<watch::Sender<ShutdownSignal>>,
) -> Result<Response<ShutdownResponse>, Status> {
    let delay = req.delay_seconds;

    info!("Shutdown requested with delay: {} seconds", delay);

    let shutdown_tx = shutdown_tx.clone();

    // Always wait a little so the response reaches the caller before the server stops
    tokio::spawn(async move {
        let wait = if delay > 0 {
            Duration::from_secs(u64::from(delay))
        } else {
            Duration::from_millis(100)
        };
        tokio::time::sleep(wait).await;
        let _ = shutdown_tx.send(ShutdownSignal::Shutdown);
    });

    let message = if delay > 0 {
        format!(
            "Daemon will shutdown in {}",
            humantime::format_duration(Duration::from_secs(u64::from(delay)))
        )
    } else {
        "Daemon shutting down".to_string()
    };

    Ok(Response::new(ShutdownResponse {
        success: true,
        message,
    }))
}
