// Prompt text for resume analysis.
// The score field and its instruction are spliced in only when a job post is supplied.

use chrono::NaiveDate;

use crate::llm_client::ChatMessage;

/// System prompt template. Replace `{score_field}` and `{score_instruction}` before sending.
pub const RESUME_CHECK_SYSTEM_TEMPLATE: &str = r#"You are a concise resume ATS AI checker. Extract candidate details and assess relevancy.
Return strict JSON with this format:
{
  "name": "string",
  "location": "string",
  "work_experience": {
    "role": "string",
    "years": float,
    "highlights": ["string"]
  },
  "skills": ["string"],{score_field}
  "feedbacks": ["string"]
}
'name', 'location', and 'work_experience' are based on the resume.
The 'role' must be only one specific title.
The 'years' field must be a numeric float. Use null when unknown. Don't count fieldwork experience that is irrelevant to the position in the job post.{score_instruction}
The 'feedbacks' are feedbacks from you to improve the resume quality.
Do NOT include any text outside the JSON object."#;

pub const SCORE_FIELD: &str = "\n  \"score\": float (0.0 to 10.0),";

pub const SCORE_INSTRUCTION: &str =
    "\nThe 'score' is a score for how relevant the resume is to the job post.";

/// The job post, if it has any non-whitespace content.
pub fn non_blank(job_post: Option<&str>) -> Option<&str> {
    job_post.filter(|p| !p.trim().is_empty())
}

pub fn build_system_prompt(include_score: bool) -> String {
    let (field, instruction) = if include_score {
        (SCORE_FIELD, SCORE_INSTRUCTION)
    } else {
        ("", "")
    };
    RESUME_CHECK_SYSTEM_TEMPLATE
        .replace("{score_field}", field)
        .replace("{score_instruction}", instruction)
}

/// User content is assembled in one pass; resume and job post text are never
/// scanned for placeholders.
pub fn build_user_prompt(resume_text: &str, job_post: Option<&str>, today: NaiveDate) -> String {
    format!(
        "RESUME:\n{resume_text}\n\nJOB POST:\n{job_post}\n\nNOW_DATE:{now_date}",
        job_post = non_blank(job_post).unwrap_or("None"),
        now_date = today.format("%Y-%m-%d"),
    )
}

/// Builds the system + user message pair for one analysis.
pub fn build_messages(
    resume_text: &str,
    job_post: Option<&str>,
    today: NaiveDate,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(build_system_prompt(non_blank(job_post).is_some())),
        ChatMessage::user(build_user_prompt(resume_text, job_post, today)),
    ]
}
