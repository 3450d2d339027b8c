//! Summarization paths and the per-request dispatch between them.

pub mod dispatch;
pub mod extractive;

// Re-export main types for convenience
pub use dispatch::{SummaryMethod, SummaryOutcome, dispatch};
pub use extractive::extractive_fallback;
