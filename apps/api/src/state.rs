use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. `OpenAiClient` in production.
    pub llm: Arc<dyn ChatCompletion>,
    pub config: Config,
}
