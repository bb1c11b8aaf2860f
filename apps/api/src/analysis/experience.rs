//! Work-experience normalization.
//!
//! Models return `work_experience` as an object, a list of per-job objects, or
//! something else entirely. Every shape is folded into one `ExperienceSummary`
//! without failing.

use serde_json::{Map, Value};

use crate::analysis::duration::parse_years_at;
use crate::analysis::models::ExperienceSummary;

/// Keys consumed into `role`/`years`; everything else in a list item becomes a highlight.
const RESERVED_KEYS: [&str; 4] = ["role", "title", "position", "years"];

/// The shapes `work_experience` arrives in.
#[derive(Debug)]
pub enum ExperienceShape<'a> {
    Object(&'a Map<String, Value>),
    List(&'a [Value]),
    Other,
}

impl<'a> ExperienceShape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => ExperienceShape::Object(map),
            Value::Array(items) => ExperienceShape::List(items),
            _ => ExperienceShape::Other,
        }
    }
}

/// Normalizes `value` using `current_year` for open-ended date ranges.
pub fn normalize_work_experience(value: &Value, current_year: i32) -> ExperienceSummary {
    match ExperienceShape::of(value) {
        ExperienceShape::Object(map) => from_object(map, current_year),
        ExperienceShape::List(items) => from_list(items, current_year),
        ExperienceShape::Other => ExperienceSummary::default(),
    }
}

fn from_object(map: &Map<String, Value>, current_year: i32) -> ExperienceSummary {
    ExperienceSummary {
        role: map.get("role").and_then(scalar_text),
        years: map
            .get("years")
            .and_then(|v| parse_years_at(v, current_year)),
        highlights: map.get("highlights").map(highlight_list).unwrap_or_default(),
    }
}

fn from_list(items: &[Value], current_year: i32) -> ExperienceSummary {
    let mut summary = ExperienceSummary::default();

    for item in items {
        let Value::Object(entry) = item else {
            let text = display_text(item);
            if !text.is_empty() {
                summary.highlights.push(text);
            }
            continue;
        };

        if summary.role.is_none() {
            summary.role = ["role", "title"]
                .iter()
                .find_map(|key| entry.get(*key).and_then(scalar_text));
        }
        if summary.years.is_none() {
            summary.years = entry
                .get("years")
                .and_then(|v| parse_years_at(v, current_year));
        }

        let parts: Vec<String> = entry
            .iter()
            .filter(|(key, value)| !RESERVED_KEYS.contains(&key.as_str()) && is_truthy(value))
            .map(|(key, value)| (key, display_text(value)))
            .filter(|(_, text)| !text.is_empty())
            .map(|(key, text)| format!("{key}: {text}"))
            .collect();
        if !parts.is_empty() {
            summary.highlights.push(parts.join("; "));
        }
    }

    summary
}

/// A non-blank string or a number, as text. Anything else is not a usable title.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn highlight_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|v| !v.is_null())
            .map(display_text)
            .filter(|text| !text.is_empty())
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Human-readable text for a JSON value: strings are unquoted, `null` is
/// `"null"`, lists of scalars are comma-joined and an empty list is `"[]"`.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) if items.iter().all(|v| !v.is_array() && !v.is_object()) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
