//! Axum route handlers for the chat assistant.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::CandidateCard;
use crate::search::matcher::QueryPlan;
use crate::search::response::{describe_results, GREETING};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub candidates: Vec<CandidateCard>,
    pub applied_filters: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub reply: &'static str,
}

/// GET /api/v1/chat
///
/// Opening message shown when the assistant is first opened.
pub async fn handle_chat_greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse { reply: GREETING })
}

/// POST /api/v1/chat
///
/// Answers one message. Each call is independent; the client keeps the
/// conversation history.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    if state.config.chat_reply_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.chat_reply_delay_ms)).await;
    }

    let candidates = state.candidates.list().await?;
    let plan = QueryPlan::parse(&request.message);
    let results = plan.apply(&candidates);
    let reply = describe_results(&results, &request.message);

    info!(
        matched = results.len(),
        filters = ?plan.applied_filters(),
        "Chat query answered"
    );

    Ok(Json(ChatResponse {
        reply,
        candidates: results.into_iter().map(CandidateCard::from).collect(),
        applied_filters: plan.applied_filters(),
    }))
}
