//! Query interpreter & matcher.
//!
//! A query is interpreted once into a `QueryPlan`, then the plan is applied to
//! every candidate as a hard filter:
//! 1. Blank query → nothing matches.
//! 2. Any signal fired → a candidate must satisfy every fired signal.
//! 3. No signal fired → whole-profile substring search with the raw query.
//!
//! Results keep collection order; the matcher never ranks or mutates.

use tracing::debug;

use crate::models::candidate::Candidate;
use crate::search::signals::{detect_signals, Signal};

/// How a query will be applied to candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    Empty,
    /// Conjunction of every fired signal.
    Filters(Vec<Signal>),
    /// Lower-cased query, untrimmed, matched against the whole profile.
    FullText(String),
}

impl QueryPlan {
    pub fn parse(query: &str) -> Self {
        if query.trim().is_empty() {
            return QueryPlan::Empty;
        }

        // Surrounding whitespace is part of the full-text needle.
        let lowered = query.to_lowercase();
        let signals = detect_signals(&lowered);
        if signals.is_empty() {
            QueryPlan::FullText(lowered)
        } else {
            QueryPlan::Filters(signals)
        }
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        match self {
            QueryPlan::Empty => false,
            QueryPlan::Filters(signals) => signals.iter().all(|s| s.admits(candidate)),
            QueryPlan::FullText(needle) => searchable_text(candidate).contains(needle.as_str()),
        }
    }

    /// Labels of the structured filters in effect; empty for full-text and
    /// blank queries.
    pub fn applied_filters(&self) -> Vec<String> {
        match self {
            QueryPlan::Filters(signals) => signals.iter().map(Signal::label).collect(),
            QueryPlan::Empty | QueryPlan::FullText(_) => vec![],
        }
    }

    pub fn apply<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        candidates.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Returns the candidates matching `query`, in collection order.
pub fn search<'a>(query: &str, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
    let plan = QueryPlan::parse(query);
    let results = plan.apply(candidates);
    debug!(?plan, matched = results.len(), "Candidate search");
    results
}

/// All profile fields joined by spaces and lower-cased.
fn searchable_text(candidate: &Candidate) -> String {
    let mut parts = vec![
        candidate.name.as_str(),
        candidate.title.as_str(),
        candidate.location.as_str(),
        candidate.experience.as_str(),
        candidate.education.as_str(),
        candidate.summary.as_str(),
    ];
    parts.extend(candidate.skills.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::seed::reference_candidates;

    fn names(results: &[&Candidate]) -> Vec<String> {
        results.iter().map(|c| c.name.clone()).collect()
    }

    fn make_candidate(id: u32, title: &str, location: &str, experience: &str) -> Candidate {
        Candidate {
            id,
            name: format!("Candidate {id}"),
            title: title.to_string(),
            location: location.to_string(),
            experience: experience.to_string(),
            skills: vec!["Python".to_string()],
            education: "Bachelor's in Statistics".to_string(),
            summary: "Works with data".to_string(),
            match_score: 50,
        }
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let candidates = reference_candidates();
        assert!(search("", &candidates).is_empty());
        assert!(search("   \t ", &candidates).is_empty());
        assert_eq!(QueryPlan::parse("  "), QueryPlan::Empty);
    }

    #[test]
    fn test_name_query_falls_back_to_full_text() {
        let candidates = reference_candidates();
        assert_eq!(
            QueryPlan::parse("Sarah"),
            QueryPlan::FullText("sarah".to_string())
        );
        assert_eq!(names(&search("Sarah", &candidates)), vec!["Sarah Chen"]);
    }

    #[test]
    fn test_full_text_spans_fields_and_skills() {
        let candidates = reference_candidates();
        // skill only
        assert_eq!(names(&search("Figma", &candidates)), vec!["Elena Rodriguez"]);
        // summary only
        assert_eq!(names(&search("FINTECH", &candidates)), vec!["Sarah Chen"]);
        // summary runs straight into the skills once joined
        assert_eq!(
            names(&search("modeling python", &candidates)),
            vec!["David Park"]
        );
    }

    #[test]
    fn test_full_text_keeps_surrounding_whitespace() {
        let candidates = reference_candidates();
        assert_eq!(
            QueryPlan::parse(" Sarah"),
            QueryPlan::FullText(" sarah".to_string())
        );
        // "sarah" opens the profile text and "statistics" closes it
        assert!(search(" Sarah", &candidates).is_empty());
        assert!(search("Statistics ", &candidates).is_empty());
        // padding that lines up with a field separator still matches
        assert_eq!(names(&search(" Chen", &candidates)), vec!["Sarah Chen"]);
    }

    #[test]
    fn test_full_text_is_literal_substring() {
        let candidates = reference_candidates();
        assert!(search("python developer", &candidates).is_empty());
    }

    #[test]
    fn test_full_text_without_hits_is_empty() {
        let candidates = reference_candidates();
        assert!(search("kubernetes", &candidates).is_empty());
    }

    #[test]
    fn test_react_query_returns_full_stack_developer() {
        let candidates = reference_candidates();
        assert_eq!(names(&search("react", &candidates)), vec!["Marcus Johnson"]);
    }

    #[test]
    fn test_bachelor_query_keeps_collection_order() {
        let candidates = reference_candidates();
        assert_eq!(
            names(&search("bachelor", &candidates)),
            vec!["Marcus Johnson", "Elena Rodriguez", "David Park"]
        );
    }

    #[test]
    fn test_three_years_threshold() {
        let candidates = reference_candidates();
        // everyone has at least 3 years
        assert_eq!(search("3 years", &candidates).len(), 4);
        assert_eq!(
            names(&search("4 years", &candidates)),
            vec!["Sarah Chen", "Elena Rodriguez"]
        );
        assert!(search("6 yrs", &candidates).is_empty());
    }

    #[test]
    fn test_experience_threshold_against_fixture() {
        let candidates = vec![
            make_candidate(1, "Analyst", "Boston, MA", "2 years"),
            make_candidate(2, "Analyst", "Boston, MA", "3 years"),
            make_candidate(3, "Analyst", "Boston, MA", "no experience"),
            make_candidate(4, "Analyst", "Boston, MA", "11 years"),
        ];
        let ids: Vec<u32> = search("3 years", &candidates).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_data_scientists_in_new_york() {
        let candidates = reference_candidates();
        let query = "Show me data scientists in New York with 3+ years of experience";
        // "3+ years" is not a numeral directly followed by "year"
        assert_eq!(
            QueryPlan::parse(query).applied_filters(),
            vec!["role: data science", "location: new york"]
        );
        assert_eq!(names(&search(query, &candidates)), vec!["David Park"]);

        let strict = "data scientists in new york with 3 years of experience";
        assert_eq!(names(&search(strict, &candidates)), vec!["David Park"]);
    }

    #[test]
    fn test_conjunction_is_intersection() {
        let candidates = reference_candidates();
        let react = search("react", &candidates);
        let new_york = search("new york", &candidates);
        let both = search("react in new york", &candidates);

        let expected: Vec<&Candidate> = candidates
            .iter()
            .filter(|c| react.contains(c) && new_york.contains(c))
            .collect();
        assert_eq!(both, expected);
        assert!(both.is_empty());
    }

    #[test]
    fn test_conjunction_with_overlap() {
        let candidates = reference_candidates();
        let result = search("data scientist with a bachelor degree", &candidates);
        assert_eq!(names(&result), vec!["David Park"]);
    }

    #[test]
    fn test_signal_phrases_never_use_full_text() {
        let candidates = reference_candidates();
        // "degree" appears in nobody's profile, but it fires the education signal
        assert_eq!(search("degree", &candidates).len(), 3);
    }

    #[test]
    fn test_search_is_idempotent_and_non_mutating() {
        let candidates = reference_candidates();
        let snapshot = candidates.clone();
        let first = search("data science", &candidates);
        let second = search("data science", &candidates);
        assert_eq!(first, second);
        assert_eq!(candidates, snapshot);
    }

    #[test]
    fn test_non_ascii_and_pathological_input_is_total() {
        let candidates = reference_candidates();
        assert!(search("数据科学家 🚀", &candidates).is_empty());
        let huge = format!("{} years", "7".repeat(10_000));
        assert!(search(&huge, &candidates).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(search("react", &[]).is_empty());
        assert!(search("Sarah", &[]).is_empty());
    }

    #[test]
    fn test_applied_filters_empty_for_full_text() {
        assert!(QueryPlan::parse("Sarah").applied_filters().is_empty());
        assert!(QueryPlan::parse("").applied_filters().is_empty());
    }
}
