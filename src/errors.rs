use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Nothing to summarize: input is empty")]
    EmptyInput,

    #[error("Input exceeds the model's maximum length: {0}")]
    InputTooLong(String),

    #[error("Summarization pipeline failed: {0}")]
    Pipeline(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Http(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizeError {
    fn from(error: anyhow::Error) -> Self {
        SummarizeError::Pipeline(error.to_string())
    }
}
