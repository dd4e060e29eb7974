//! Streamable HTTP transport for the MCP server.
//!
//! Each incoming session gets its own [`StoreService`] from the factory, so
//! credentials resolved in one session never leak into another. The endpoint
//! carries no authentication of its own; bind it to localhost or a trusted
//! network interface.

use std::net::SocketAddr;
use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};

use crate::service::StoreService;

/// Serve MCP over streamable HTTP until the shutdown future resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails while
/// running.
pub async fn serve_http<F, S>(
    service_factory: F,
    addr: SocketAddr,
    shutdown: S,
) -> std::io::Result<()>
where
    F: Fn() -> Result<StoreService, std::io::Error> + Send + Sync + 'static,
    S: std::future::Future<Output = ()> + Send + 'static,
{
    let session_manager = Arc::new(LocalSessionManager::default());
    let http_service = StreamableHttpService::new(
        service_factory,
        session_manager,
        StreamableHttpServerConfig::default(),
    );

    let app = axum::Router::new().fallback_service(http_service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(bind = %addr, "MCP HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    #[test]
    fn parse_bind_addresses() {
        assert!("127.0.0.1:9100".parse::<SocketAddr>().is_ok());
        assert!("0.0.0.0:9100".parse::<SocketAddr>().is_ok());
        assert!("not-an-address".parse::<SocketAddr>().is_err());
    }
}
