mod auth;
mod config;
mod errors;
mod extract;
mod interview;
mod llm_client;
mod portfolio;
mod routes;
mod state;
mod storage;
mod structurer;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{AllowAllVerifier, HttpTokenVerifier, IdentityProvider};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::portfolio::render::build_environment;
use crate::routes::{build_router, ARTIFACT_ROUTE};
use crate::state::AppState;
use crate::storage::{ArtifactStore, FsArtifactStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Bind the template directory once; handlers only read from it.
    let templates = Arc::new(build_environment(&config.templates_dir));
    info!(
        "Template environment bound to {}",
        config.templates_dir.display()
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Artifact store: filesystem-backed, served under ARTIFACT_ROUTE
    let store: Arc<dyn ArtifactStore> =
        Arc::new(FsArtifactStore::new(&config.output_dir, ARTIFACT_ROUTE));
    info!("Artifact store rooted at {}", config.output_dir.display());

    // Identity provider
    let identity: Arc<dyn IdentityProvider> = match &config.auth_verify_url {
        Some(url) => {
            info!("Token verification via {url}");
            Arc::new(HttpTokenVerifier::new(url.clone()))
        }
        None => {
            warn!("AUTH_VERIFY_URL not set — running with the allow-all dev verifier");
            Arc::new(AllowAllVerifier)
        }
    };

    // Build app state
    let state = AppState {
        llm,
        templates,
        store,
        identity,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
