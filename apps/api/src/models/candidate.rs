use serde::{Deserialize, Serialize};

/// A searchable candidate profile. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub title: String,
    /// "City, ST" or "Remote".
    pub location: String,
    /// Numeral plus unit, e.g. "5 years". The leading numeral is what gets compared.
    pub experience: String,
    /// Display order.
    pub skills: Vec<String>,
    pub education: String,
    pub summary: String,
    /// Precomputed relevance percentage (0 – 100), display only.
    #[serde(rename = "match")]
    pub match_score: u8,
}

impl Candidate {
    /// The first `n` skills in display order.
    pub fn top_skills(&self, n: usize) -> &[String] {
        &self.skills[..self.skills.len().min(n)]
    }
}

/// Summary card rendered by the chat assistant and the dashboard list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCard {
    pub id: u32,
    pub name: String,
    pub initials: String,
    pub title: String,
    /// "{location} • {experience}"
    pub headline: String,
    pub top_skills: Vec<String>,
    pub match_percent: u8,
}

impl From<&Candidate> for CandidateCard {
    fn from(candidate: &Candidate) -> Self {
        let initials = candidate
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect();

        CandidateCard {
            id: candidate.id,
            name: candidate.name.clone(),
            initials,
            title: candidate.title.clone(),
            headline: format!("{} • {}", candidate.location, candidate.experience),
            top_skills: candidate.top_skills(3).to_vec(),
            match_percent: candidate.match_score,
        }
    }
}
