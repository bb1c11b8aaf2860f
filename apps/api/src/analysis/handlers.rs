//! Axum route handlers for the resume check API.

use anyhow::anyhow;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tokio::task::JoinError;
use tracing::info;

use crate::analysis::models::ResumeCheckResponse;
use crate::errors::AppError;
use crate::pdf::{extract_text, ExtractionError};
use crate::state::AppState;

const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["application/pdf", "application/octet-stream"];

/// The parts of a `/resume/check` upload we care about.
#[derive(Debug, Default)]
struct ResumeCheckForm {
    resume_file: Option<Bytes>,
    job_post: Option<String>,
}

/// POST /resume/check
///
/// Multipart form: `resume_file` (PDF, required) and `job_post` (text, optional).
/// Extracts the resume text and returns the model's normalized summary.
pub async fn handle_resume_check(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeCheckResponse>, AppError> {
    let form = read_form(multipart).await?;
    let file = form
        .resume_file
        .ok_or_else(|| AppError::Validation("resume_file is required.".to_string()))?;

    info!(bytes = file.len(), "Received resume upload");
    // The extractor is CPU-bound and may panic on malformed input
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&file))
        .await
        .map_err(extraction_task_error)??;

    let summary = state
        .analyzer
        .analyze(&resume_text, form.job_post.as_deref())
        .await?;

    Ok(Json(ResumeCheckResponse { summary }))
}

async fn read_form(mut multipart: Multipart) -> Result<ResumeCheckForm, AppError> {
    let mut form = ResumeCheckForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error("Invalid multipart body", e))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume_file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                if !ACCEPTED_CONTENT_TYPES.contains(&content_type.as_str()) {
                    return Err(AppError::Validation("Please upload a PDF file.".to_string()));
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| upload_error("Invalid file", e))?;
                form.resume_file = Some(data);
            }
            Some("job_post") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| upload_error("Invalid job_post", e))?;
                form.job_post = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Oversized bodies keep their 413; every other multipart failure is a bad request.
fn upload_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", err.body_text()))
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}

/// A panic inside the extractor means the document could not be read; a
/// cancelled task is our failure, not the uploader's.
fn extraction_task_error(err: JoinError) -> AppError {
    if err.is_panic() {
        ExtractionError::Unreadable("extractor crashed".to_string()).into()
    } else {
        AppError::Internal(anyhow!("PDF extraction task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_extractor_panic_is_extraction_error() {
        let err = tokio::task::spawn_blocking(|| -> String { panic!("bad xref table") })
            .await
            .unwrap_err();
        assert!(matches!(
            extraction_task_error(err),
            AppError::Extraction(ExtractionError::Unreadable(_))
        ));
    }

    #[tokio::test]
    async fn test_cancelled_extraction_is_internal_error() {
        let handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        handle.abort();
        let err = handle.await.unwrap_err();
        assert!(err.is_cancelled());
        assert!(matches!(extraction_task_error(err), AppError::Internal(_)));
    }
}
