//! Resume Analyzer — orchestrates one analysis.
//!
//! Flow: build prompt → one chat-completion call → extract JSON →
//!       normalize work_experience → validate into `ResumeSummary`.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument};

use crate::analysis::experience::normalize_work_experience;
use crate::analysis::extract::{extract_json_object, ParseError};
use crate::analysis::models::ResumeSummary;
use crate::analysis::prompts::{build_messages, non_blank};
use crate::config::Config;
use crate::llm_client::{ChatCompletion, ChatRequest, LlmError, ResponseFormat};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("OPENROUTER_API_KEY is not configured.")]
    MissingApiKey,

    #[error("OpenRouter request failed: {0}")]
    Request(#[from] LlmError),

    #[error("Failed to parse LLM response: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Clone)]
pub struct ResumeAnalyzer {
    config: Arc<Config>,
    backend: Arc<dyn ChatCompletion>,
}

impl ResumeAnalyzer {
    pub fn new(config: Arc<Config>, backend: Arc<dyn ChatCompletion>) -> Self {
        Self { config, backend }
    }

    /// Analyzes `resume_text`, scoring it against `job_post` when one is given.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_post: Option<&str>,
    ) -> Result<ResumeSummary, AnalysisError> {
        self.analyze_on(resume_text, job_post, Utc::now().date_naive())
            .await
    }

    /// [`analyze`](Self::analyze) with an explicit "today".
    #[instrument(skip_all, fields(model = %self.config.openrouter_model))]
    pub async fn analyze_on(
        &self,
        resume_text: &str,
        job_post: Option<&str>,
        today: NaiveDate,
    ) -> Result<ResumeSummary, AnalysisError> {
        if self.config.api_key().is_none() {
            return Err(AnalysisError::MissingApiKey);
        }

        let has_job_post = non_blank(job_post).is_some();
        info!(
            resume_chars = resume_text.chars().count(),
            has_job_post, "Analyzing resume"
        );

        let request = ChatRequest {
            model: self.config.openrouter_model.clone(),
            messages: build_messages(resume_text, job_post, today),
            response_format: ResponseFormat::json_object(),
        };

        let response = self.backend.complete(&request).await?;
        let summary = summarize(response.first_content(), has_job_post, today.year())?;
        Ok(summary)
    }
}

/// Turns raw completion content into a validated summary.
pub fn summarize(
    content: &str,
    has_job_post: bool,
    current_year: i32,
) -> Result<ResumeSummary, ParseError> {
    let mut raw = extract_json_object(content)?;

    if let Some(experience) = raw.get("work_experience") {
        let normalized = normalize_work_experience(experience, current_year);
        raw.insert(
            "work_experience".to_string(),
            serde_json::to_value(normalized).map_err(ParseError::Schema)?,
        );
    }

    let mut summary: ResumeSummary =
        serde_json::from_value(Value::Object(raw)).map_err(ParseError::Schema)?;
    if !has_job_post {
        summary.score = None;
    }
    summary.validate().map_err(ParseError::Invalid)?;
    Ok(summary)
}
