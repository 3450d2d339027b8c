use axum::Json;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, info};

use super::AppState;
use super::page;
use crate::core::models::{ApiError, DownloadRequest, SummarizeRequest, SummarizeResponse};
use crate::errors::SummarizeError;
use crate::summarizer::dispatch::{SummaryMethod, dispatch};

pub const EMPTY_INPUT_MESSAGE: &str = "Please paste some text first.";
pub const FALLBACK_NOTICE: &str = "Short input — using fast extractive fallback.";
pub const PIPELINE_FAILURE_MESSAGE: &str =
    "Sorry, the summarizer is unavailable right now. Please try again later.";
pub const DOWNLOAD_FILENAME: &str = "summary.txt";

pub async fn index() -> Html<String> {
    Html(page::render())
}

/// Run one summarize trigger: dispatch to the extractive or model path and
/// report the outcome, or a warning for blank input.
pub async fn summarize(
    State(state): State<AppState>,
    Form(request): Form<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, (StatusCode, Json<ApiError>)> {
    let config = request.summary_config();

    match dispatch(state.pipeline(), &request.text, &config).await {
        Ok(outcome) => {
            info!("Generated summary via {:?} path", outcome.method);
            let notice = (outcome.method == SummaryMethod::Extractive)
                .then(|| FALLBACK_NOTICE.to_string());
            Ok(Json(SummarizeResponse {
                summary: outcome.summary,
                method: outcome.method,
                notice,
            }))
        }
        Err(SummarizeError::EmptyInput) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(EMPTY_INPUT_MESSAGE)),
        )),
        Err(e) => {
            error!("Failed to generate summary: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ApiError::new(PIPELINE_FAILURE_MESSAGE)),
            ))
        }
    }
}

/// Echo the displayed summary back as a `summary.txt` attachment, so the
/// downloaded bytes are exactly the displayed bytes.
pub async fn download(Form(request): Form<DownloadRequest>) -> Response {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        header::HeaderValue::from_str(&format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""))
            .unwrap_or_else(|_| header::HeaderValue::from_static("attachment")),
    );

    (headers, request.summary).into_response()
}
