use condense::core::config::AppConfig;
use condense::errors::SummarizeError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    condense::setup_logging();
    let config = AppConfig::from_env().map_err(SummarizeError::Config)?;
    condense::web::serve(config).await
}
