use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::extractive::extractive_fallback;
use crate::core::config::SummaryConfig;
use crate::errors::SummarizeError;
use crate::pipeline::{GenerationParams, PipelineCache, SummaryPipeline};
use crate::utils::text::{truncate_words, word_count};

/// Inputs shorter than this (in words) are eligible for the extractive path.
pub const FALLBACK_WORD_THRESHOLD: usize = 30;
/// Number of sentences the extractive path keeps.
pub const FALLBACK_SENTENCES: usize = 2;
/// Number of words kept when retrying after a length rejection.
pub const TRUNCATE_WORDS: usize = 1000;

/// Which path produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMethod {
    Extractive,
    Model,
}

#[derive(Debug)]
pub struct SummaryOutcome {
    pub summary: String,
    pub method: SummaryMethod,
}

/// Decide on and run a summarization path for one trigger.
///
/// Empty or whitespace-only input is rejected up front. Very short input
/// takes the extractive path when the fallback is enabled; everything else
/// goes to the model with the configured length bounds. The pipeline handle
/// is only resolved on the model path, so short inputs never pay for
/// pipeline construction.
///
/// # Errors
///
/// Returns [`SummarizeError::EmptyInput`] for blank input, and whatever the
/// model path propagates otherwise. The extractive path cannot fail.
pub async fn dispatch(
    cache: &PipelineCache,
    text: &str,
    config: &SummaryConfig,
) -> Result<SummaryOutcome, SummarizeError> {
    if text.trim().is_empty() {
        return Err(SummarizeError::EmptyInput);
    }

    if config.use_fallback && word_count(text) < FALLBACK_WORD_THRESHOLD {
        info!("Short input; using the extractive fallback");
        return Ok(SummaryOutcome {
            summary: extractive_fallback(text, FALLBACK_SENTENCES),
            method: SummaryMethod::Extractive,
        });
    }

    let pipeline = cache.get().await?;
    let summary = model_summarize(pipeline.as_ref(), text, config).await?;
    Ok(SummaryOutcome {
        summary,
        method: SummaryMethod::Model,
    })
}

/// Invoke the model on the full text, retrying exactly once with a
/// truncated prompt if the model rejects the input as too long.
///
/// # Errors
///
/// Propagates any non-length pipeline failure, and the failure of the
/// single retry.
pub async fn model_summarize(
    pipeline: &dyn SummaryPipeline,
    text: &str,
    config: &SummaryConfig,
) -> Result<String, SummarizeError> {
    let params = GenerationParams::deterministic(config.min_length, config.max_length);

    match pipeline.invoke(text, &params).await {
        Ok(summary) => Ok(summary),
        Err(SummarizeError::InputTooLong(detail)) => {
            warn!(
                "Input too long for the model ({}); retrying with the first {} words",
                detail, TRUNCATE_WORDS
            );
            let prompt = truncate_words(text, TRUNCATE_WORDS);
            pipeline.invoke(&prompt, &params).await
        }
        Err(e) => Err(e),
    }
}
