pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Editing sessions (Form Editor surface)
        .route("/api/v1/sessions", post(editor::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(editor::handle_get_session).delete(editor::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/edits", post(editor::handle_apply_edit))
        .route("/api/v1/sessions/:id/watch", get(editor::handle_watch))
        // Template renderer
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/sessions/:id/preview", get(render::handle_preview))
        // AI assist
        .route(
            "/api/v1/sessions/:id/generate",
            post(generation::handle_generate),
        )
        .route(
            "/api/v1/sessions/:id/generate/status",
            get(generation::handle_generation_status),
        )
        // PDF export
        .route("/api/v1/sessions/:id/export", post(export::handle_export))
        .with_state(state)
}
