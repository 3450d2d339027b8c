//! Condense - a single-page text summarizer backed by a pretrained
//! summarization model, with a fast extractive fallback for very short
//! inputs.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the single interactive page and its two form actions
//! - reqwest for the hosted summarization pipeline
//! - an async once-cell so the pipeline handle is constructed at most once
//!   per process and reused by every later request
//! - Tokio for the async runtime
//!
//! # Example
//!
//! ```no_run
//! use condense::core::config::{AppConfig, SummaryConfig};
//! use condense::pipeline::PipelineCache;
//! use condense::summarizer::dispatch::dispatch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     condense::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!
//!     // The pipeline handle is constructed lazily, on the first request
//!     // that actually needs the model.
//!     let cache = PipelineCache::new(config.pipeline.clone());
//!
//!     let outcome = dispatch(
//!         &cache,
//!         "Paste a long article here and it will be condensed.",
//!         &SummaryConfig::default(),
//!     )
//!     .await?;
//!     println!("{}", outcome.summary);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod summarizer;
pub mod utils;
pub mod web;

/// Configure structured logging for the interactive server.
///
/// Sets up tracing-subscriber with a plain formatter and an environment
/// filter, so `RUST_LOG` controls verbosity (default `info`). Call once at
/// process start.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of main
/// condense::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
