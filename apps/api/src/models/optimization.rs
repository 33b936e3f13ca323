use serde::{Deserialize, Serialize};

/// Raw optimize request body. Field names follow the public JSON contract.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizeBody {
    #[serde(default)]
    pub latex_code: String,
    #[serde(default)]
    pub job_description: String,
    pub preserve_format: Option<bool>,
}

/// A validated optimization request: both strings trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRequest {
    pub document: String,
    pub job_description: String,
    pub preserve_format: bool,
}

/// Normalised outcome of one optimization call.
///
/// Invariants: `keywords_added.len() <= 12`, `suggestions.len() <= 5`,
/// `70 <= match_score <= 95`, and `modified_document` is a plausible LaTeX
/// document (or the original input).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub modified_document: String,
    pub keywords_added: Vec<String>,
    pub match_score: i64,
    pub changes_made: usize,
    pub suggestions: Vec<String>,
}

/// Success body for `POST /api/optimize/`.
#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub success: bool,
    pub original_latex: String,
    pub modified_latex: String,
    pub keywords_added: Vec<String>,
    pub match_score: i64,
    pub changes_made: usize,
    pub suggestions: Vec<String>,
}

impl OptimizeResponse {
    pub fn new(original_latex: String, result: OptimizationResult) -> Self {
        Self {
            success: true,
            original_latex,
            modified_latex: result.modified_document,
            keywords_added: result.keywords_added,
            match_score: result.match_score,
            changes_made: result.changes_made,
            suggestions: result.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults_missing_fields() {
        let body: OptimizeBody = serde_json::from_str("{}").unwrap();
        assert!(body.latex_code.is_empty());
        assert!(body.job_description.is_empty());
        assert_eq!(body.preserve_format, None);
    }

    #[test]
    fn test_response_uses_public_field_names() {
        let result = OptimizationResult {
            modified_document: "new".into(),
            keywords_added: vec!["Rust".into()],
            match_score: 80,
            changes_made: 1,
            suggestions: vec![],
        };
        let value = serde_json::to_value(OptimizeResponse::new("old".into(), result)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["original_latex"], "old");
        assert_eq!(value["modified_latex"], "new");
        assert_eq!(value["match_score"], 80);
        assert_eq!(value["keywords_added"][0], "Rust");
    }
}
