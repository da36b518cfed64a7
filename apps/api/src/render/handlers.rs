//! Axum route handlers for template listing and live preview.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{self, TemplateId};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Numeric template selector; out-of-range values fall back to Classic.
    #[serde(default = "default_selector")]
    pub template: u32,
}

fn default_selector() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub selector: u32,
    pub name: &'static str,
}

/// GET /api/v1/templates
///
/// The closed template set, in selector order, for pickers.
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        TemplateId::ALL
            .iter()
            .map(|t| TemplateInfo {
                selector: t.selector(),
                name: t.name(),
            })
            .collect(),
    )
}

/// GET /api/v1/sessions/:id/preview?template=N
///
/// Re-derives the full visual document from current session state.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PreviewParams>,
) -> Result<Html<String>, AppError> {
    let session = state.sessions.get(id).await?;
    let snapshot = session.snapshot().await;
    let document = render::render(&snapshot.data, TemplateId::from_selector(params.template));
    Ok(Html(document.html))
}
