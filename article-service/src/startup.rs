use crate::config::ArticleConfig;
use crate::handlers;
use crate::services::ArticleDb;
use axum::{extract::Request, routing::get, Router, ServiceExt};
use service_core::error::AppError;
use service_core::tower::Layer;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: ArticleConfig,
    pub db: ArticleDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ArticleConfig) -> Result<Self, AppError> {
        let db = ArticleDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
        };

        let router = Router::new()
            .route("/", get(handlers::home))
            .route(
                "/articles",
                get(handlers::list_articles).post(handlers::create_article),
            )
            .route("/articles/search", get(handlers::search_articles))
            .route("/articles/:id", get(handlers::get_article))
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        // Trailing-slash requests are served as their canonical path; the
        // layer has to wrap the router so it runs before route matching.
        let app = NormalizePathLayer::trim_trailing_slash().layer(router);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app));

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &ArticleDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
