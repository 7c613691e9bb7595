use std::sync::Arc;

use minijinja::Environment;

use crate::auth::IdentityProvider;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::storage::ArtifactStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Template environment, built once at startup and read-only afterwards.
    pub templates: Arc<Environment<'static>>,
    pub store: Arc<dyn ArtifactStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub config: Config,
}
