use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use super::client::{HfPipeline, SummaryPipeline};
use crate::core::config::PipelineConfig;
use crate::errors::SummarizeError;

/// Process-wide cache for the summarization pipeline handle.
///
/// The handle is constructed on first use and reused until process exit.
/// Concurrent first calls are serialized by the cell, so construction runs
/// at most once.
pub struct PipelineCache {
    config: PipelineConfig,
    handle: OnceCell<Arc<dyn SummaryPipeline>>,
}

impl PipelineCache {
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            handle: OnceCell::new(),
        }
    }

    /// A cache wrapping an already constructed pipeline, e.g. a stub.
    #[must_use]
    pub fn with_handle(pipeline: Arc<dyn SummaryPipeline>) -> Self {
        Self {
            config: PipelineConfig::default(),
            handle: OnceCell::new_with(Some(pipeline)),
        }
    }

    /// The cached handle, constructing it if this is the first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline handle cannot be constructed.
    pub async fn get(&self) -> Result<Arc<dyn SummaryPipeline>, SummarizeError> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                info!(
                    "Constructing summarization pipeline for model {} (first use)",
                    self.config.model
                );
                HfPipeline::connect(&self.config).map(|p| Arc::new(p) as Arc<dyn SummaryPipeline>)
            })
            .await?;
        Ok(Arc::clone(handle))
    }
}
