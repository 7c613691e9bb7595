pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::interview::handlers as interview_handlers;
use crate::portfolio::handlers;
use crate::state::AppState;

/// Route prefix generated artifacts are served under. The artifact store
/// returns locators with this prefix so response URLs and static serving
/// stay in sync.
pub const ARTIFACT_ROUTE: &str = "/generated_portfolios";

/// Resume uploads are small; anything larger is rejected up front.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/portfolio/generate-direct",
            post(handlers::handle_generate_direct),
        )
        .route(
            "/api/portfolio/save-edited",
            post(handlers::handle_save_edited),
        )
        .route(
            "/api/interview/chat",
            post(interview_handlers::handle_interview_chat),
        )
        .route(
            "/api/interview/summarize",
            post(interview_handlers::handle_interview_summarize),
        )
        .nest_service(ARTIFACT_ROUTE, ServeDir::new(state.config.output_dir.clone()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
