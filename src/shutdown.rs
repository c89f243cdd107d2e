//! Termination signal handling.
//!
//! The orchestrator stops a task with SIGTERM (and Ctrl+C sends SIGINT locally).
//! Either one resolves [`signal`], which axum uses to stop accepting connections
//! and drain the ones in flight.
//! Used by: main.

/// Resolves once SIGINT or SIGTERM is received.
///
/// If a handler cannot be installed, the failure is logged and that signal is
/// simply never observed; the other one still works.
pub async fn signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
