use crate::config::{MenuConfig, StoreBackend};
use crate::handlers;
use crate::services::{InMemoryMenuStore, MenuStore, MongoMenuStore, UnavailableStore};
use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MenuStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/menu", post(handlers::create_menu_item))
        .route(
            "/menu/:id",
            put(handlers::update_menu_item).delete(handlers::delete_menu_item),
        )
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Pick the store for the configured backend.
///
/// A Mongo client that cannot be built is logged and replaced by an
/// [`UnavailableStore`]; startup carries on either way.
pub async fn build_store(config: &MenuConfig) -> Arc<dyn MenuStore> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory menu store");
            Arc::new(InMemoryMenuStore::new())
        }
        StoreBackend::Mongo => {
            let Some(uri) = config.mongodb.uri.as_deref() else {
                tracing::error!("Error connecting to MongoDB: MONGO_URI is not set");
                return Arc::new(UnavailableStore::new("MONGO_URI is not set"));
            };

            match MongoMenuStore::connect(uri, config.mongodb.database.as_deref()).await {
                Ok(store) => {
                    store.spawn_connection_check();
                    Arc::new(store)
                }
                Err(e) => {
                    tracing::error!("Error connecting to MongoDB: {}", e);
                    Arc::new(UnavailableStore::new(e.to_string()))
                }
            }
        }
    }
}

type ServerFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

pub struct Application {
    port: u16,
    server: ServerFuture,
    state: AppState,
}

impl Application {
    pub async fn build(config: MenuConfig) -> Result<Self, AppError> {
        let store = build_store(&config).await;
        Self::build_with_store(config, store).await
    }

    pub async fn build_with_store(
        config: MenuConfig,
        store: Arc<dyn MenuStore>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(store);
        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server running on port {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::pin(server.into_future()),
            state,
        })
    }

    pub fn store(&self) -> Arc<dyn MenuStore> {
        self.state.store.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
