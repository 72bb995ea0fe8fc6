//! Assistant reply text for a set of search results.

use crate::models::candidate::Candidate;

pub const GREETING: &str = "Hi! I'm your AI recruiting assistant. I can help you find candidates based on their skills, experience, location, education, and more. Try asking me something like 'Show me data scientists in New York with 3+ years of experience' or 'Find React developers with bachelor's degrees'.";

pub const NO_MATCH_REPLY: &str = "I couldn't find any candidates matching your criteria. Try adjusting your search terms or being more specific about the requirements.";

/// Builds the reply for `results`. A single match is described in full; for
/// several, only the count is stated and the caller renders the cards.
///
/// `_query` is accepted so replies can quote the request later; the current
/// wording doesn't use it.
pub fn describe_results(results: &[&Candidate], _query: &str) -> String {
    match results {
        [] => NO_MATCH_REPLY.to_string(),
        [candidate] => format!(
            "I found 1 candidate that matches your criteria: {}, a {} with {} of experience, located in {}. They have a {} and specialize in {}. {}",
            candidate.name,
            candidate.title,
            candidate.experience,
            candidate.location,
            candidate.education,
            candidate.top_skills(3).join(", "),
            candidate.summary,
        ),
        many => format!(
            "I found {} candidates matching your criteria. Here are the top matches based on relevance and experience:",
            many.len()
        ),
    }
}
