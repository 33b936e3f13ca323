//! Optimizer flow: Prompt Builder → External Model Client → Response Parser → Result Normalizer.
//!
//! One model call per request, no retry. Transport failures are errors; a reply
//! with the wrong shape is not, it degrades to the fallback result.

pub mod handlers;
pub mod parser;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::models::optimization::{OptimizationRequest, OptimizationResult, OptimizeBody};
use parser::parse_or_fallback;
use prompts::{build_optimize_prompt, OPTIMIZE_SYSTEM};

impl OptimizationRequest {
    /// Trims both inputs and rejects the request if either is empty.
    /// `preserve_format` defaults to `true`.
    pub fn validate(body: OptimizeBody) -> Result<Self, AppError> {
        let document = body.latex_code.trim();
        let job_description = body.job_description.trim();

        if document.is_empty() || job_description.is_empty() {
            return Err(AppError::Validation("Both fields required".to_string()));
        }

        Ok(Self {
            document: document.to_string(),
            job_description: job_description.to_string(),
            preserve_format: body.preserve_format.unwrap_or(true),
        })
    }
}

/// Runs one optimization round trip against `model`.
pub async fn optimize_document(
    model: &dyn ChatModel,
    request: &OptimizationRequest,
) -> Result<OptimizationResult, AppError> {
    let prompt = build_optimize_prompt(
        &request.document,
        &request.job_description,
        request.preserve_format,
    );

    info!(
        "Requesting optimization: document={} chars, job_description={} chars, preserve_format={}",
        request.document.chars().count(),
        request.job_description.chars().count(),
        request.preserve_format
    );

    let reply = model.complete(OPTIMIZE_SYSTEM, &prompt).await?;
    let result = parse_or_fallback(&reply, &request.document);

    info!(
        "Optimization finished: score={}, keywords={}, changes={}",
        result.match_score,
        result.keywords_added.len(),
        result.changes_made
    );

    Ok(result)
}
