pub mod health;

use axum::{routing::get, Router};

use crate::candidates::handlers as candidate_handlers;
use crate::search::handlers as chat_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat assistant
        .route(
            "/api/v1/chat",
            get(chat_handlers::handle_chat_greeting).post(chat_handlers::handle_chat),
        )
        // Dashboard & detail view
        .route(
            "/api/v1/candidates",
            get(candidate_handlers::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates/:id",
            get(candidate_handlers::handle_get_candidate),
        )
        .with_state(state)
}
