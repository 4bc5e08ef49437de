// LogLens - http/handlers.rs
//
// The four boundary operations: upload, summary, top-messages, search.
// File scans are blocking I/O, so each handler pushes the service call
// onto the blocking pool. Empty analytic results are 204 No Content.

use crate::app::service::LogService;
use crate::http::error::{ApiError, StatusBody};
use crate::util::constants;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tokio::task;

/// `POST /api/logs/upload` -- multipart upload of one log file.
pub async fn upload(
    State(service): State<Arc<LogService>>,
    mut multipart: Multipart,
) -> Result<Json<StatusBody>, ApiError> {
    let mut data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            data = Some(field.bytes().await.map_err(|e| {
                ApiError::BadRequest(format!("Failed to read file part: {e}"))
            })?);
            break;
        }
    }

    let Some(data) = data else {
        return Err(ApiError::BadRequest(
            "Missing 'file' part in multipart request.".to_string(),
        ));
    };

    let file_name = run_blocking(move || service.store_upload(&data)).await??;
    Ok(Json(StatusBody::success(format!(
        "File '{file_name}' uploaded and saved."
    ))))
}

/// `GET /api/logs/analysis/summary`.
pub async fn summary(State(service): State<Arc<LogService>>) -> Result<Response, ApiError> {
    let summary = run_blocking(move || service.summary()).await?;
    Ok(match summary {
        Some(summary) => Json(summary).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

#[derive(Debug, Deserialize)]
pub struct TopMessagesParams {
    limit: Option<i64>,
}

/// `GET /api/logs/analysis/top-messages?limit=N`.
pub async fn top_messages(
    State(service): State<Arc<LogService>>,
    Query(params): Query<TopMessagesParams>,
) -> Result<Response, ApiError> {
    let limit = match params.limit {
        Some(limit) if limit < 1 => {
            return Err(ApiError::BadRequest(
                "Limit must be greater than 0.".to_string(),
            ));
        }
        Some(limit) => limit as usize,
        None => constants::DEFAULT_TOP_MESSAGES_LIMIT,
    };

    let ranked = run_blocking(move || service.top_messages(limit)).await?;
    Ok(if ranked.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(ranked).into_response()
    })
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    query: String,
    #[serde(default, rename = "caseSensitive")]
    case_sensitive: bool,
    #[serde(default, rename = "regex")]
    use_regex: bool,
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_size")]
    size: i64,
}

fn default_page() -> i64 {
    constants::DEFAULT_SEARCH_PAGE
}

fn default_size() -> i64 {
    constants::DEFAULT_SEARCH_PAGE_SIZE
}

/// `GET /api/logs/search?query=...&caseSensitive=...&regex=...&page=...&size=...`.
pub async fn search(
    State(service): State<Arc<LogService>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let matches = run_blocking(move || {
        service.search(
            &params.query,
            params.case_sensitive,
            params.use_regex,
            params.page,
            params.size,
        )
    })
    .await??;

    Ok(if matches.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(matches).into_response()
    })
}

/// Run a synchronous service call on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!(error = %e, "Blocking task failed");
        ApiError::Internal
    })
}
