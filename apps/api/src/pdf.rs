//! PDF text extraction for uploaded resumes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded file is empty.")]
    Empty,

    #[error("Failed to read PDF: {0}")]
    Unreadable(String),

    #[error("No extractable text found in PDF.")]
    NoText,
}

/// Extracts the text layer of a PDF held in memory.
///
/// Lines are trimmed and blank lines dropped. A document that yields nothing but
/// whitespace (e.g. a scanned image) is an error, not an empty string.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

    let text = clean_text(&raw);
    if text.is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}

fn clean_text(raw: &str) -> String {
    raw.lines()
        .map(|line| line.trim().replace('\u{0}', "").replace('\u{FEFF}', ""))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
