//! Axum route handlers for the recruiter dashboard and candidate detail view.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateCard};
use crate::search::matcher::search;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CandidateListQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateListResponse {
    /// The search text, or `None` when listing everyone.
    pub query: Option<String>,
    pub total: usize,
    pub candidates: Vec<CandidateCard>,
}

/// GET /api/v1/candidates?q=
///
/// Without a search text the dashboard shows the whole collection.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<CandidateListQuery>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let all = state.candidates.list().await?;
    let query = params.q.filter(|q| !q.trim().is_empty());

    let cards: Vec<CandidateCard> = match &query {
        Some(q) => search(q, &all).into_iter().map(CandidateCard::from).collect(),
        None => all.iter().map(CandidateCard::from).collect(),
    };
    debug!(query = ?query, total = cards.len(), "Dashboard list");

    Ok(Json(CandidateListResponse {
        query,
        total: cards.len(),
        candidates: cards,
    }))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Candidate>, AppError> {
    state
        .candidates
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}
