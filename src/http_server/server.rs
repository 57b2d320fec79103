//! # HTTP Server
//!
//! Combines all endpoint routers and runs the axum server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::course_routes::{course_routes, CatalogState};
use super::docs_routes::docs_routes;
use super::health_routes::health_routes;
use super::media_routes::{media_routes, MediaState};

/// HTTP server for the course catalog API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> Router {
        let catalog_state = Arc::new(CatalogState::seeded(config.random_pick));
        let media_state = Arc::new(MediaState::new(&config.media_dir));

        // Permissive CORS when no origins are configured (development),
        // the configured list otherwise.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
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
            // Health check at root level
            .merge(health_routes())
            // Static API document and the /api/v1 banner
            .merge(docs_routes())
            // Course CRUD + search and the upload endpoint under /api/v1
            .nest(
                "/api/v1",
                course_routes(catalog_state).merge(media_routes(media_state)),
            )
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

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::info(
            "server_started",
            &[
                ("addr", &addr.to_string()),
                ("docs", "/api-docs"),
                ("random_pick", if self.config.random_pick { "on" } else { "off" }),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
