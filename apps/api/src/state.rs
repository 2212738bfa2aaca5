use std::sync::Arc;

use crate::llm_client::GenerativeModel;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generative model behind a trait object, so tests can swap in
    /// a stub instead of the real Gemini client.
    pub model: Arc<dyn GenerativeModel>,
}
