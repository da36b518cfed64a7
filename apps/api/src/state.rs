use std::sync::Arc;

use crate::export::Rasterizer;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Registry of live editing sessions.
    pub sessions: SessionStore,
    /// The text-generation collaborator. Swapped for a stub in tests.
    pub generator: Arc<dyn TextGenerator>,
    /// The rasterization collaborator behind the export trigger.
    pub rasterizer: Arc<dyn Rasterizer>,
}
