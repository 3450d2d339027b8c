use serde::{Deserialize, Serialize};

use crate::core::config::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, SummaryConfig};
use crate::summarizer::dispatch::SummaryMethod;

fn default_min_length() -> u32 {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

fn default_use_fallback() -> bool {
    true
}

/// One summarize trigger, as posted by the page form.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_use_fallback")]
    pub use_fallback: bool,
}

impl SummarizeRequest {
    #[must_use]
    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig {
            min_length: self.min_length,
            max_length: self.max_length,
            use_fallback: self.use_fallback,
        }
        .clamped()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub method: SummaryMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// The page posts the displayed summary back, so the downloaded bytes are
/// exactly the displayed bytes.
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
