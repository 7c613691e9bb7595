//! HTTP handlers for the portfolio pipeline.
//!
//! Flow for generate-direct: authenticate → extract text → structure via LLM
//! (fallback record when the model returns nothing) → normalize → render →
//! persist under a random name → return hosted URL + HTML.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::{extract_text, ExtractError};
use crate::portfolio::normalize::normalize;
use crate::portfolio::render::{render_portfolio, RenderOutcome, DEFAULT_TEMPLATE};
use crate::state::AppState;
use crate::storage::artifact_name;
use crate::structurer::{fallback_record, structure_resume};

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub url: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveEditedRequest {
    pub html: String,
}

/// POST /api/portfolio/generate-direct
/// Multipart fields: `file` (required), `template_id` (optional).
pub async fn handle_generate_direct(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<PortfolioResponse>, AppError> {
    let mut file_bytes: Option<Bytes> = None;
    let mut filename = String::new();
    let mut template_id = DEFAULT_TEMPLATE.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                filename = field.file_name().unwrap_or("").to_string();
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
                );
            }
            "template_id" => {
                template_id = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid template_id: {e}")))?;
            }
            _ => {}
        }
    }

    let file_bytes =
        file_bytes.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;
    let extension = Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw_text = extract_text(&file_bytes, &extension).map_err(|e| match e {
        ExtractError::UnsupportedFormat(_) => AppError::Validation(e.to_string()),
        ExtractError::Pdf(_) => AppError::Extraction(e.to_string()),
    })?;

    info!("Structuring resume for user {}", user.uid);
    let record = match structure_resume(&raw_text, &state.llm)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?
    {
        Some(record) => record,
        None => {
            warn!("structurer returned no data — using fallback record");
            fallback_record(&raw_text)
        }
    };

    let context = normalize(record);
    let html = match render_portfolio(&state.templates, &context, &template_id) {
        RenderOutcome::Rendered(html) => html,
        RenderOutcome::Failed(failure) => return Err(AppError::Render(failure.to_string())),
    };

    let name = artifact_name("portfolio");
    let locator = state
        .store
        .save(&name, &html)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    info!("Generated portfolio {} for user {}", name, user.uid);
    Ok(Json(PortfolioResponse {
        url: public_url(&state.config.public_base_url, &locator),
        html,
    }))
}

/// POST /api/portfolio/save-edited
/// Persists HTML edited client-side and returns its hosted URL.
pub async fn handle_save_edited(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<SaveEditedRequest>,
) -> Result<Json<PortfolioResponse>, AppError> {
    if request.html.trim().is_empty() {
        return Err(AppError::Validation(
            "missing 'html' in request body".to_string(),
        ));
    }

    let name = artifact_name("portfolio_edited");
    let locator = state
        .store
        .save(&name, &request.html)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    info!("Saved edited portfolio {} for user {}", name, user.uid);
    Ok(Json(PortfolioResponse {
        url: public_url(&state.config.public_base_url, &locator),
        html: request.html,
    }))
}

fn public_url(base_url: &str, locator: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), locator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_joins_without_double_slash() {
        assert_eq!(
            public_url("http://localhost:8080/", "/generated_portfolios/p.html"),
            "http://localhost:8080/generated_portfolios/p.html"
        );
        assert_eq!(
            public_url("http://localhost:8080", "/generated_portfolios/p.html"),
            "http://localhost:8080/generated_portfolios/p.html"
        );
    }
}
