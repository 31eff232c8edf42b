//! Axum route handler for the Enrichment API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enrichment::enricher::{enrich_job_description, MISSING_JOB_DESCRIPTION};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnrichRequest {
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnrichResponse {
    pub improved_description: String,
}

/// POST /api/v1/job-descriptions/enrich
///
/// Rewrites a raw job description into a structured Markdown brief.
/// A body that is not a JSON object with a string `job_description` is a validation error.
pub async fn handle_enrich(
    State(state): State<AppState>,
    payload: Result<Json<EnrichRequest>, JsonRejection>,
) -> Result<Json<EnrichResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected enrich body: {rejection}");
        AppError::Validation(MISSING_JOB_DESCRIPTION.to_string())
    })?;

    let improved_description = enrich_job_description(
        request.job_description.as_deref(),
        state.llm.as_ref(),
        &state.config.openai_model,
    )
    .await?;

    Ok(Json(EnrichResponse {
        improved_description,
    }))
}
