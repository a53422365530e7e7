use axum::{
    Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::errors::ServerError;
use crate::page::Page;
use crate::templates::Templates;

pub struct Server {
    pub router: Router,
    pub port: u16,
    pub ip: [u8; 4],
}

/// Read-only state shared by every request. Each request renders the page
/// from scratch; nothing is cached or mutated between page loads.
pub struct ServerState {
    pub page: Page,
    pub templates: Templates,
}

impl Server {
    pub fn init(ip: [u8; 4], port: u16, page: Page, templates: Templates) -> Self {
        let state = Arc::new(ServerState { page, templates });
        Server {
            router: Self::router(state),
            ip,
            port,
        }
    }

    pub fn router(state: Arc<ServerState>) -> Router {
        Router::new()
            .route("/", get(Self::home_page))
            .route("/healthz", get(Self::healthz))
            .fallback(Self::handle_404)
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Binds and serves until ctrl-c.
    pub async fn start(&self) -> Result<(), ServerError> {
        let addr = SocketAddr::from((self.ip, self.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::BindFailed {
                addr: addr.to_string(),
                source,
            })?;
        self.serve(listener).await
    }

    /// Serves on an already-bound listener.
    pub async fn serve(&self, listener: tokio::net::TcpListener) -> Result<(), ServerError> {
        let local_addr = listener.local_addr().map_err(ServerError::LocalAddrFailed)?;
        tracing::info!("Server running at http://{}/", local_addr);
        axum::serve(listener, self.router.clone())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::StartFailed)
    }

    async fn home_page(
        State(state): State<Arc<ServerState>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let html = state.page.render(&state.templates).map_err(|e| {
            tracing::error!("Error rendering page: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        Ok(Html(html))
    }

    async fn healthz() -> &'static str {
        "ok"
    }

    async fn handle_404() -> (StatusCode, &'static str) {
        (StatusCode::NOT_FOUND, "Not found")
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
