//! HTTP handlers for the mock interview endpoints.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::{
    can_summarize, next_question, summarize, ChatMessage, ChatReply, InterviewSummary,
    ProctoringData,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub job_description: String,
    pub chat_history: Vec<ChatMessage>,
    pub difficulty: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub job_description: String,
    pub chat_history: Vec<ChatMessage>,
    #[serde(default)]
    pub proctoring_data: Option<ProctoringData>,
}

/// POST /api/interview/chat
pub async fn handle_interview_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description cannot be empty".to_string(),
        ));
    }

    let reply = next_question(
        &state.llm,
        &request.job_description,
        &request.chat_history,
        &request.difficulty,
    )
    .await
    .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(reply))
}

/// POST /api/interview/summarize
pub async fn handle_interview_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<InterviewSummary>, AppError> {
    if !can_summarize(&request.chat_history, request.proctoring_data.as_ref()) {
        return Err(AppError::Validation(
            "Chat history cannot be empty for a normal summary".to_string(),
        ));
    }

    let summary = summarize(
        &state.llm,
        &request.job_description,
        &request.chat_history,
        request.proctoring_data.as_ref(),
    )
    .await
    .map_err(|e| AppError::Llm(e.to_string()))?;

    info!(
        "Interview summarized: score={} over {} messages",
        summary.overall_score,
        request.chat_history.len()
    );
    Ok(Json(summary))
}
