//! The interactive web surface: one page, one summarize action, one
//! download action.

pub mod handlers;
pub mod page;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::core::config::AppConfig;
use crate::pipeline::PipelineCache;

/// Shared state for the request handlers: the process-wide pipeline cache,
/// owned here and passed by reference into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<PipelineCache>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            pipeline: Arc::new(PipelineCache::new(config.pipeline.clone())),
        }
    }

    /// State backed by an existing cache, e.g. one seeded with a stub.
    #[must_use]
    pub fn with_pipeline_cache(cache: PipelineCache) -> Self {
        Self {
            pipeline: Arc::new(cache),
        }
    }

    #[must_use]
    pub fn pipeline(&self) -> &PipelineCache {
        &self.pipeline
    }
}

#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/summarize", post(handlers::summarize))
        .route("/download", post(handlers::download))
        .with_state(state)
}

/// Bind and serve the application until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(&config);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
