//! Response parser & result normalizer.
//!
//! The model's reply is not guaranteed to be pure JSON. Everything funnels
//! through [`parse_or_fallback`]: a reply that cannot be read as a JSON object
//! degrades to [`fallback_result`] instead of failing the request.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::optimization::OptimizationResult;

pub const MIN_SCORE: i64 = 70;
pub const MAX_SCORE: i64 = 95;
/// Used when the model omits `match_score` or sends a non-number.
pub const DEFAULT_SCORE: i64 = 75;
pub const MAX_KEYWORDS: usize = 12;
pub const MAX_SUGGESTIONS: usize = 5;
/// Shorter model documents are treated as truncated and discarded.
pub const MIN_DOCUMENT_CHARS: usize = 100;
pub const DOCUMENT_CLASS_MARKER: &str = "\\documentclass";

const FALLBACK_KEYWORDS: &[&str] = &["Python", "JavaScript"];
const FALLBACK_SCORE: i64 = 72;
const FALLBACK_SUGGESTIONS: &[&str] =
    &["Review job keywords and add them naturally to your experience"];

const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Add quantifiable achievements with numbers",
    "Use industry-specific keywords from job description",
    "Include relevant certifications or training",
];

/// Result returned when the model's reply is unusable: the original document
/// unchanged plus fixed metadata.
pub fn fallback_result(original: &str) -> OptimizationResult {
    OptimizationResult {
        modified_document: original.to_string(),
        keywords_added: to_strings(FALLBACK_KEYWORDS),
        match_score: FALLBACK_SCORE,
        changes_made: FALLBACK_KEYWORDS.len(),
        suggestions: to_strings(FALLBACK_SUGGESTIONS),
    }
}

/// Attempts a structured parse of the model reply; falls back on any failure.
pub fn parse_or_fallback(raw: &str, original: &str) -> OptimizationResult {
    match extract_json_object(raw) {
        Some(object) => normalize(&object, original),
        None => fallback_result(original),
    }
}

/// Strips code fences and parses the text between the first `{` and the last `}`.
pub fn extract_json_object(raw: &str) -> Option<Map<String, Value>> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) else {
        warn!("Model reply contained no JSON object; using fallback result");
        return None;
    };
    if end < start {
        warn!("Model reply braces are out of order; using fallback result");
        return None;
    }

    match serde_json::from_str::<Map<String, Value>>(&cleaned[start..=end]) {
        Ok(map) => Some(map),
        Err(e) => {
            warn!("Model reply JSON did not parse ({e}); using fallback result");
            None
        }
    }
}

/// Applies score clamping, list limits and document validation to a parsed reply.
pub fn normalize(reply: &Map<String, Value>, original: &str) -> OptimizationResult {
    let keywords = string_list(reply.get("keywords_added"));
    let suggestions = string_list(reply.get("suggestions"));

    let modified_document = reply
        .get("modified_latex")
        .and_then(Value::as_str)
        .filter(|doc| is_plausible_document(doc))
        .unwrap_or(original)
        .to_string();

    let changes_made = count_new_lines(original, &modified_document).max(keywords.len());

    let suggestions = if suggestions.is_empty() {
        to_strings(DEFAULT_SUGGESTIONS)
    } else {
        suggestions.into_iter().take(MAX_SUGGESTIONS).collect()
    };

    OptimizationResult {
        modified_document,
        keywords_added: keywords.into_iter().take(MAX_KEYWORDS).collect(),
        match_score: clamp_score(reply.get("match_score")),
        changes_made,
        suggestions,
    }
}

/// Clamps a reported score into `[MIN_SCORE, MAX_SCORE]`, defaulting to `DEFAULT_SCORE`.
pub fn clamp_score(value: Option<&Value>) -> i64 {
    value
        .and_then(Value::as_f64)
        .map(|score| score.round() as i64)
        .unwrap_or(DEFAULT_SCORE)
        .clamp(MIN_SCORE, MAX_SCORE)
}

fn is_plausible_document(doc: &str) -> bool {
    doc.chars().count() >= MIN_DOCUMENT_CHARS && doc.contains(DOCUMENT_CLASS_MARKER)
}

/// Number of distinct lines in `modified` that do not occur in `original`.
fn count_new_lines(original: &str, modified: &str) -> usize {
    let before: HashSet<&str> = original.lines().collect();
    modified
        .lines()
        .collect::<HashSet<&str>>()
        .difference(&before)
        .count()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
