//! Axum route handlers for session lifecycle and the edit surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editor::{self, ResumeUpdate};
use crate::errors::AppError;
use crate::session::StateSnapshot;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub snapshot: StateSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct WatchParams {
    /// Last revision the caller has seen; the response carries the first
    /// snapshot with a higher one.
    #[serde(default)]
    pub since: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Starts an editing session seeded with the starter resume.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session = state.sessions.create().await;
    let snapshot = session.snapshot().await;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.id,
            created_at: session.created_at,
            snapshot,
        }),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let snapshot = session.snapshot().await;
    Ok(Json(SessionResponse {
        session_id: session.id,
        created_at: session.created_at,
        snapshot,
    }))
}

/// DELETE /api/v1/sessions/:id
///
/// Discards the session; its state is gone for good (nothing persists).
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/edits
///
/// Applies one targeted update and returns the new snapshot.
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ResumeUpdate>,
) -> Result<Json<StateSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    let snapshot = session.update(|data| editor::apply(data, update)).await?;
    Ok(Json(snapshot))
}

/// GET /api/v1/sessions/:id/watch?since=N
///
/// Long-poll notification channel for subscribed views: resolves with the
/// first snapshot whose revision exceeds `since`.
pub async fn handle_watch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<WatchParams>,
) -> Result<Json<StateSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    let mut rx = session.subscribe();
    let snapshot = rx
        .wait_for(|s| s.revision > params.since)
        .await
        .map_err(|e| anyhow::anyhow!("watch channel closed: {e}"))?
        .clone();
    Ok(Json(snapshot))
}
