//! Candidate repository — the one data source shared by the chat assistant
//! and the dashboard.
//!
//! `AppState` holds an `Arc<dyn CandidateRepository>`; the in-memory backend is
//! the only one today, seeded from the reference set or a JSON fixture file.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::candidates::seed::reference_candidates;
use crate::errors::AppError;
use crate::models::candidate::Candidate;

/// Read-only access to the candidate collection. Implement this to swap data
/// origins without touching the matcher or the handlers.
///
/// The in-memory backend never fails; the `Result` is for backends that can.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Every candidate, in collection order.
    async fn list(&self) -> Result<Arc<[Candidate]>, AppError>;

    async fn find_by_id(&self, id: u32) -> Result<Option<Candidate>, AppError>;
}

/// Candidates held in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct InMemoryCandidateRepository {
    candidates: Arc<[Candidate]>,
}

impl InMemoryCandidateRepository {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: candidates.into(),
        }
    }

    /// Repository over the compiled-in reference candidates.
    pub fn seeded() -> Self {
        Self::new(reference_candidates())
    }

    /// Loads a JSON array of candidates. Rejects duplicate ids.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidate file '{}'", path.display()))?;
        let candidates: Vec<Candidate> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid candidate JSON in '{}'", path.display()))?;

        let mut ids: Vec<u32> = candidates.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
            anyhow::bail!(
                "Duplicate candidate id {} in '{}'",
                pair[0],
                path.display()
            );
        }

        info!(
            "Loaded {} candidates from {}",
            candidates.len(),
            path.display()
        );
        Ok(Self::new(candidates))
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn list(&self) -> Result<Arc<[Candidate]>, AppError> {
        Ok(Arc::clone(&self.candidates))
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Candidate>, AppError> {
        Ok(self.candidates.iter().find(|c| c.id == id).cloned())
    }
}
