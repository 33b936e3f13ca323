use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// External chat model. `None` when `GROQ_API_KEY` is not configured.
    pub model: Option<Arc<dyn ChatModel>>,
}
