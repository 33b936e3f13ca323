//! Axum route handler for the optimize endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::AppError;
use crate::models::optimization::{OptimizationRequest, OptimizeBody, OptimizeResponse};
use crate::optimizer::optimize_document;
use crate::state::AppState;

/// POST /api/optimize/
///
/// Validates input before anything else, so an empty job description is a 400
/// even when the model credential is missing.
pub async fn handle_optimize(
    State(state): State<AppState>,
    body: Result<Json<OptimizeBody>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let Json(body) =
        body.map_err(|e| AppError::Validation(format!("Invalid request body: {}", e.body_text())))?;
    let request = OptimizationRequest::validate(body)?;

    let model = state
        .model
        .as_ref()
        .ok_or_else(|| AppError::Configuration("API key missing".to_string()))?;

    let result = optimize_document(model.as_ref(), &request).await?;

    Ok(Json(OptimizeResponse::new(request.document, result)))
}
