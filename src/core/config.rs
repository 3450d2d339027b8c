use std::env;

use serde::{Deserialize, Serialize};

/// Slider bounds for the minimum summary length, in tokens.
pub const MIN_LENGTH_BOUNDS: (u32, u32) = (5, 100);
/// Slider bounds for the maximum summary length, in tokens.
pub const MAX_LENGTH_BOUNDS: (u32, u32) = (20, 200);
pub const DEFAULT_MIN_LENGTH: u32 = 20;
pub const DEFAULT_MAX_LENGTH: u32 = 80;

/// A small, fast model; override with `PIPELINE_MODEL` if you prefer another.
pub const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
/// Model loading on the first invocation can take minutes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub model: String,
    pub endpoint: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, String> {
        let timeout_secs = match env::var("PIPELINE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("PIPELINE_TIMEOUT_SECS: {}", e))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            pipeline: PipelineConfig {
                model: env::var("PIPELINE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                endpoint: env::var("PIPELINE_ENDPOINT").ok(),
                api_token: env::var("HF_API_TOKEN").ok(),
                timeout_secs,
            },
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: None,
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PipelineConfig {
    /// The inference URL for the configured model, unless an explicit
    /// endpoint override is set.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        self.endpoint.clone().unwrap_or_else(|| {
            format!(
                "https://api-inference.huggingface.co/models/{}",
                self.model
            )
        })
    }
}

/// Per-request summary parameters, as collected from the page controls.
///
/// `min_length` and `max_length` are clamped into their slider ranges, but
/// the relation between the two is handed to the pipeline as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub min_length: u32,
    pub max_length: u32,
    pub use_fallback: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            use_fallback: true,
        }
    }
}

impl SummaryConfig {
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.min_length = self
            .min_length
            .clamp(MIN_LENGTH_BOUNDS.0, MIN_LENGTH_BOUNDS.1);
        self.max_length = self
            .max_length
            .clamp(MAX_LENGTH_BOUNDS.0, MAX_LENGTH_BOUNDS.1);
        self
    }
}
