//! Axum route handler for the PDF export trigger.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{assemble_pdf, export_filename};
use crate::render::{self, TemplateId};
use crate::session::StateSnapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(default = "default_selector")]
    pub template: u32,
}

fn default_selector() -> u32 {
    1
}

/// POST /api/v1/sessions/:id/export?template=N
///
/// Renders the selected template from current state, rasterizes it, and
/// responds with the assembled PDF as a download. Guarded by the session's
/// export flag; the flag is cleared on success and failure alike.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ExportParams>,
) -> Result<Response, AppError> {
    let session = state.sessions.get(id).await?;
    let snapshot = session.begin_export().await?;
    let result = run_export(&state, snapshot, params.template).await;
    session.finish_export().await;

    let (filename, pdf) = result?;
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, pdf).into_response())
}

async fn run_export(
    state: &AppState,
    snapshot: StateSnapshot,
    selector: u32,
) -> Result<(String, Vec<u8>), AppError> {
    let document = render::render(&snapshot.data, TemplateId::from_selector(selector));

    let png = state
        .rasterizer
        .rasterize(&document)
        .await
        .map_err(|e| AppError::Export(e.to_string()))?;

    let filename = export_filename(&snapshot.data.personal_info.name);

    // PDF assembly is CPU-bound; keep it off the async workers.
    let pdf = tokio::task::spawn_blocking(move || assemble_pdf(&png, "Resume"))
        .await
        .map_err(|e| AppError::Export(e.to_string()))?
        .map_err(|e| AppError::Export(e.to_string()))?;

    Ok((filename, pdf))
}
