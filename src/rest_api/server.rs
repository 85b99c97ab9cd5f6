//! # HTTP Server
//!
//! Binds the crimebook routes to a listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::{Logger, Severity};
use crate::store::RecordBook;

use super::config::HttpServerConfig;
use super::routes::{crimebook_routes, health_routes, CrimebookState};

/// HTTP server for the crimebook API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already-bootstrapped record book
    pub fn new(book: RecordBook, config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config, book);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, book: RecordBook) -> Router {
        let state = Arc::new(CrimebookState::new(book));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(crimebook_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start serving (async); returns only on listener failure
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string()), ("resource", "/crimebook")],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
