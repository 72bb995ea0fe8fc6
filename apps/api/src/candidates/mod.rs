// Candidate data access. The matcher never sees where candidates come from.

pub mod handlers;
pub mod repository;
pub mod seed;
