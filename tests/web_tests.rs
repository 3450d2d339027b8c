use std::sync::Arc;

use async_trait::async_trait;
use axum::Json;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use condense::core::models::{DownloadRequest, SummarizeRequest};
use condense::errors::SummarizeError;
use condense::pipeline::{GenerationParams, PipelineCache, SummaryPipeline};
use condense::summarizer::dispatch::SummaryMethod;
use condense::web::AppState;
use condense::web::handlers::{
    DOWNLOAD_FILENAME, EMPTY_INPUT_MESSAGE, FALLBACK_NOTICE, download, summarize,
};

struct FixedSummaryStub;

#[async_trait]
impl SummaryPipeline for FixedSummaryStub {
    async fn invoke(
        &self,
        _text: &str,
        _params: &GenerationParams,
    ) -> Result<String, SummarizeError> {
        Ok("a model summary".to_string())
    }
}

fn stub_state() -> AppState {
    AppState::with_pipeline_cache(PipelineCache::with_handle(Arc::new(FixedSummaryStub)))
}

fn request(text: &str, use_fallback: bool) -> Form<SummarizeRequest> {
    Form(SummarizeRequest {
        text: text.to_string(),
        min_length: 20,
        max_length: 80,
        use_fallback,
    })
}

#[tokio::test]
async fn test_download_artifact_is_byte_identical_to_the_summary() {
    let summary = "Hello world. How are you?".to_string();
    let response = download(Form(DownloadRequest {
        summary: summary.clone(),
    }))
    .await;

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert_eq!(
        disposition,
        format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"")
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body.as_ref(), summary.as_bytes());
}

#[tokio::test]
async fn test_download_preserves_non_ascii_bytes() {
    let summary = "Résumé — 世界.".to_string();
    let response = download(Form(DownloadRequest {
        summary: summary.clone(),
    }))
    .await;

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body.as_ref(), summary.as_bytes());
}

#[tokio::test]
async fn test_blank_input_returns_the_warning() {
    let result = summarize(State(stub_state()), request("   ", true)).await;

    let (status, Json(api_error)) = result.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(api_error.error, EMPTY_INPUT_MESSAGE);
}

#[tokio::test]
async fn test_short_input_reports_the_fallback_notice() {
    let result = summarize(
        State(stub_state()),
        request("Hello world. How are you? Fine, thanks.", true),
    )
    .await;

    let Json(response) = result.unwrap();
    assert_eq!(response.method, SummaryMethod::Extractive);
    assert_eq!(response.summary, "Hello world. How are you?");
    assert_eq!(response.notice.as_deref(), Some(FALLBACK_NOTICE));
}

#[tokio::test]
async fn test_model_path_has_no_notice_and_serializes_its_method() {
    let text = (0..40).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
    let result = summarize(State(stub_state()), request(&text, true)).await;

    let Json(response) = result.unwrap();
    assert_eq!(response.method, SummaryMethod::Model);
    assert_eq!(response.summary, "a model summary");
    assert!(response.notice.is_none());

    // The page switches its fixed-width display on this field value.
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["method"], "model");
    assert!(value.get("notice").is_none());
}
