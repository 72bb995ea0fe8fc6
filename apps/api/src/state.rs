use std::sync::Arc;

use crate::candidates::repository::CandidateRepository;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Single candidate source for both the chat assistant and the dashboard.
    pub candidates: Arc<dyn CandidateRepository>,
    pub config: Config,
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::candidates::repository::InMemoryCandidateRepository;

    AppState {
        candidates: Arc::new(InMemoryCandidateRepository::seeded()),
        config: Config {
            port: 0,
            rust_log: "debug".to_string(),
            candidates_path: None,
            chat_reply_delay_ms: 0,
        },
    }
}
