//! Client for the external pretrained summarization pipeline.
//!
//! The model is consumed as a black box over the Hugging Face hosted
//! inference protocol: one JSON POST per invocation, deterministic
//! generation, and a typed error when the input exceeds the model's
//! maximum length so the caller can decide on a truncation retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::core::config::PipelineConfig;
use crate::errors::SummarizeError;

/// Generation parameters forwarded to the model on every invocation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub min_length: u32,
    pub max_length: u32,
    /// Sampling is disabled so a given input reproduces the same summary.
    pub do_sample: bool,
}

impl GenerationParams {
    #[must_use]
    pub fn deterministic(min_length: u32, max_length: u32) -> Self {
        Self {
            min_length,
            max_length,
            do_sample: false,
        }
    }
}

/// The seam to the external summarization model.
///
/// Implementations must be reentrant: one handle is shared by every request
/// for the lifetime of the process.
#[async_trait]
pub trait SummaryPipeline: Send + Sync {
    /// Produce a summary of `text` within the given length bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::InputTooLong`] when the model rejects the
    /// input for exceeding its maximum sequence length, and
    /// [`SummarizeError::Pipeline`] or [`SummarizeError::Http`] for any
    /// other failure.
    async fn invoke(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<String, SummarizeError>;
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    summary_text: String,
}

/// Hosted-inference client for a pretrained summarization model.
///
/// Construction is cheap; the expensive part is the first invocation, which
/// blocks while the remote end loads the model (`wait_for_model`). The
/// handle is therefore cached process-wide by [`super::PipelineCache`].
pub struct HfPipeline {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HfPipeline {
    /// Build the HTTP client for the configured model endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn connect(config: &PipelineConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                SummarizeError::Http(format!("Failed to build pipeline HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
            api_token: config.api_token.clone(),
        })
    }
}

/// Whether a pipeline rejection body indicates the input exceeded the
/// model's maximum sequence length.
///
/// The hosted API reports this as a plain-text/JSON message rather than a
/// dedicated status code, so classification is by message content.
#[must_use]
pub fn is_length_rejection(body: &str) -> bool {
    let lowered = body.to_ascii_lowercase();
    lowered.contains("longer than")
        || lowered.contains("maximum sequence length")
        || lowered.contains("index out of range")
        || (lowered.contains("token") && lowered.contains("length"))
}

#[async_trait]
impl SummaryPipeline for HfPipeline {
    async fn invoke(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<String, SummarizeError> {
        let request_body = json!({
            "inputs": text,
            "parameters": {
                "min_length": params.min_length,
                "max_length": params.max_length,
                "do_sample": params.do_sample,
            },
            "options": { "wait_for_model": true },
        });

        debug!(
            "Invoking summarization pipeline (min_length={}, max_length={})",
            params.min_length, params.max_length
        );

        let mut request = self.client.post(&self.endpoint).json(&request_body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummarizeError::Http(format!("Pipeline request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            if is_length_rejection(&error_text) {
                info!("Pipeline rejected the input as too long (status {status})");
                return Err(SummarizeError::InputTooLong(error_text));
            }
            return Err(SummarizeError::Pipeline(format!(
                "Pipeline error (status {status}): {error_text}"
            )));
        }

        let payload: Vec<SummaryPayload> = response.json().await.map_err(|e| {
            SummarizeError::Pipeline(format!("Failed to parse pipeline response: {e}"))
        })?;

        payload
            .into_iter()
            .next()
            .map(|p| p.summary_text)
            .ok_or_else(|| SummarizeError::Pipeline("No summary in pipeline response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_params_disable_sampling() {
        let params = GenerationParams::deterministic(20, 80);
        assert_eq!(params.min_length, 20);
        assert_eq!(params.max_length, 80);
        assert!(!params.do_sample);
    }

    #[test]
    fn test_length_rejection_classification() {
        assert!(is_length_rejection(
            "The input is longer than the maximum length of 1024 tokens"
        ));
        assert!(is_length_rejection(
            "{\"error\": \"Token indices sequence length exceeds the limit\"}"
        ));
        assert!(is_length_rejection("index out of range in self"));
        assert!(!is_length_rejection("model is currently loading"));
        assert!(!is_length_rejection("internal server error"));
    }

    #[test]
    fn test_summary_payload_shape() {
        let payload: Vec<SummaryPayload> =
            serde_json::from_str(r#"[{"summary_text": "A short summary."}]"#).unwrap();
        assert_eq!(payload[0].summary_text, "A short summary.");
    }
}
