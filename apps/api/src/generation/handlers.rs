//! Axum route handlers for the AI-assist surface.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::{generate_for_field, GenerationField, GenerationOutcome};
use crate::session::StateSnapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Field tag: `summary` or `experience-<uuid>`.
    pub field: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub field: String,
    /// `applied`, or `superseded` when a later call took over the in-flight
    /// slot and this call's result was dropped.
    pub status: &'static str,
    pub snapshot: Option<StateSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct GenerationStatusResponse {
    /// Tag of the single in-flight field, if any.
    pub in_flight: Option<String>,
}

/// POST /api/v1/sessions/:id/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let field: GenerationField = request
        .field
        .parse()
        .map_err(|e: crate::generation::InvalidFieldTag| AppError::Validation(e.to_string()))?;

    let session = state.sessions.get(id).await?;

    let response = match generate_for_field(&session, state.generator.as_ref(), field).await? {
        GenerationOutcome::Applied(snapshot) => GenerateResponse {
            field: field.to_string(),
            status: "applied",
            snapshot: Some(snapshot),
        },
        GenerationOutcome::Superseded => GenerateResponse {
            field: field.to_string(),
            status: "superseded",
            snapshot: None,
        },
    };
    Ok(Json(response))
}

/// GET /api/v1/sessions/:id/generate/status
///
/// Lets clients drive their busy indicators off the in-flight marker.
pub async fn handle_generation_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GenerationStatusResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(GenerationStatusResponse {
        in_flight: session.generation_status().await.map(|f| f.to_string()),
    }))
}
