use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup, so concurrent actions never share mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: CohereClient.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
