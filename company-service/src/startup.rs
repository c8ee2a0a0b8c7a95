//! Application startup and lifecycle management.

use crate::config::CompanyConfig;
use crate::handlers;
use crate::services::{CompanyStore, MongoStore};
use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{http_metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// The store is `None` when MongoDB was unreachable at startup; company
/// routes then answer 503 while the liveness probe stays up.
#[derive(Clone)]
pub struct AppState {
    pub config: CompanyConfig,
    pub store: Option<Arc<dyn CompanyStore>>,
}

impl AppState {
    pub fn store(&self) -> Result<&Arc<dyn CompanyStore>, AppError> {
        self.store.as_ref().ok_or_else(|| {
            tracing::warn!("Company store is not connected; rejecting request");
            AppError::ServiceUnavailable
        })
    }
}

/// Builds the service router with middleware applied.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/add_company", post(handlers::add_company))
        .route("/get_companies", get(handlers::get_companies))
        .with_state(state)
        // Add metrics middleware
        .layer(from_fn(http_metrics_middleware))
        // Add tracing layer
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
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // Add CORS layer
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application, connecting to MongoDB when it is reachable.
    ///
    /// A failed connection is logged and the service starts without a
    /// store rather than refusing to boot.
    pub async fn build(config: CompanyConfig) -> Result<Self, AppError> {
        let store = match Self::connect_store(&config).await {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::error!("MongoDB is unavailable, starting without a store: {}", e);
                None
            }
        };

        Self::with_store(config, store).await
    }

    /// Build the application around an already-constructed store.
    pub async fn with_store(
        config: CompanyConfig,
        store: Option<Arc<dyn CompanyStore>>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    async fn connect_store(config: &CompanyConfig) -> Result<Arc<dyn CompanyStore>, AppError> {
        let store = MongoStore::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        store.health_check().await?;
        store.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        Ok(Arc::new(store))
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = app_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
