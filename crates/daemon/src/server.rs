//! Page server wiring

use crate::{Result, Settings};
use axum::Router;
use inkwell_http::{HttpServer, RouteGuard};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// The page router guarded by the configured protected routes
pub fn router(settings: &Settings) -> Router {
    let guard = RouteGuard::new(settings.frontend.protected_routes.iter().cloned());
    info!(
        protected = ?guard.protected_routes(),
        "Route guard configured"
    );
    inkwell_http::routes::router(guard)
}

/// Serve the pages on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, settings: &Settings, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    HttpServer::new(router(settings))
        .serve_with_shutdown(listener, shutdown)
        .await?;
    Ok(())
}

/// Bind the configured address and serve until `shutdown` resolves
pub async fn run<F>(settings: &Settings, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(settings.server.bind_addr).await?;
    serve(listener, settings, shutdown).await
}
