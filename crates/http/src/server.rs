//! HTTP server wrapper around the page router

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

/// HTTP server serving a router on a bound listener
#[derive(Clone, Debug)]
pub struct HttpServer {
    router: Router<()>,
}

impl HttpServer {
    /// Create a new HTTP server with the given router
    pub fn new(router: Router<()>) -> Self {
        Self { router }
    }

    /// Serve until the listener fails
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        self.serve_with_shutdown(listener, std::future::pending())
            .await
    }

    /// Serve until `signal` resolves, then drain open connections
    #[tracing::instrument(name = "http.serve", skip_all)]
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            info!("Listening on http://{}", addr);
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        debug!("Server stopped");
        Ok(())
    }
}
