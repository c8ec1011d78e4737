use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::host::create_router;

pub async fn run(ctx: AppContext, bind_addr: SocketAddr) -> AppResult<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!(addr = %bind_addr, "action server listening");

    axum::serve(listener, create_router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Server(err.to_string()))?;

    info!("action server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
