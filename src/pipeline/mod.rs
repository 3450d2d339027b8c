//! All pipeline functionality: the client seam to the external
//! summarization model and the process-wide handle cache.

pub mod cache;
pub mod client;

// Re-export main types for convenience
pub use cache::PipelineCache;
pub use client::{GenerationParams, HfPipeline, SummaryPipeline, is_length_rejection};
