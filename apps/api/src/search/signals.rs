//! Query signals — the ordered rule table that turns a lower-cased query into
//! filter predicates.
//!
//! Each rule is a detector over the query text. A detector that fires yields a
//! `Signal`, and the signal owns the per-candidate predicate. Rules are
//! independent: several can fire on one query and all of them apply.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::candidate::Candidate;

/// A numeral directly followed (optionally after whitespace) by "year" or "yr".
static RE_REQUIRED_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*(?:year|yr)").unwrap());

static RE_LEADING_NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// "ny" only counts as a standalone token, so "company" or "tiffany" don't
/// trigger the location filter.
static RE_NY_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bny\b").unwrap());

/// Skill tokens the assistant recognizes as explicit skill requirements.
pub const TRACKED_SKILLS: &[&str] = &["react"];

/// A filter extracted from the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Data science role or degree.
    Domain,
    /// Based in New York.
    Location,
    /// Holds a bachelor's degree.
    Education,
    MinExperience { years: u32 },
    Skill { token: &'static str },
}

impl Signal {
    /// The per-candidate predicate for this signal.
    pub fn admits(&self, candidate: &Candidate) -> bool {
        match self {
            Signal::Domain => {
                contains_ci(&candidate.title, "data scientist")
                    || contains_ci(&candidate.education, "data science")
            }
            Signal::Location => contains_ci(&candidate.location, "new york"),
            Signal::Education => contains_ci(&candidate.education, "bachelor"),
            Signal::MinExperience { years } => experience_years(&candidate.experience) >= *years,
            Signal::Skill { token } => candidate.skills.iter().any(|s| contains_ci(s, token)),
        }
    }

    /// Short label reported back to callers as an applied filter.
    pub fn label(&self) -> String {
        match self {
            Signal::Domain => "role: data science".to_string(),
            Signal::Location => "location: new york".to_string(),
            Signal::Education => "education: bachelor's degree".to_string(),
            Signal::MinExperience { years } => format!("experience: {years}+ years"),
            Signal::Skill { token } => format!("skill: {token}"),
        }
    }
}

/// One entry of the rule table.
pub struct SignalRule {
    pub name: &'static str,
    /// Runs against the lower-cased query.
    pub detect: fn(&str) -> Option<Signal>,
}

/// Evaluated in order; the order is also the order of reported filters.
pub const SIGNAL_RULES: &[SignalRule] = &[
    SignalRule {
        name: "domain",
        detect: detect_domain,
    },
    SignalRule {
        name: "location",
        detect: detect_location,
    },
    SignalRule {
        name: "education",
        detect: detect_education,
    },
    SignalRule {
        name: "experience",
        detect: detect_experience,
    },
    SignalRule {
        name: "skill",
        detect: detect_skill,
    },
];

/// Runs every rule over an already lower-cased query.
pub fn detect_signals(query_lower: &str) -> Vec<Signal> {
    SIGNAL_RULES
        .iter()
        .filter_map(|rule| {
            let signal = (rule.detect)(query_lower)?;
            debug!(rule = rule.name, ?signal, "Signal fired");
            Some(signal)
        })
        .collect()
}

fn detect_domain(q: &str) -> Option<Signal> {
    (q.contains("data science") || q.contains("data scientist")).then_some(Signal::Domain)
}

fn detect_location(q: &str) -> Option<Signal> {
    (q.contains("new york") || RE_NY_TOKEN.is_match(q)).then_some(Signal::Location)
}

fn detect_education(q: &str) -> Option<Signal> {
    (q.contains("bachelor") || q.contains("degree")).then_some(Signal::Education)
}

fn detect_experience(q: &str) -> Option<Signal> {
    let caps = RE_REQUIRED_YEARS.captures(q)?;
    Some(Signal::MinExperience {
        years: parse_saturating(&caps[1]),
    })
}

fn detect_skill(q: &str) -> Option<Signal> {
    TRACKED_SKILLS
        .iter()
        .copied()
        .find(|token| q.contains(token))
        .map(|token| Signal::Skill { token })
}

/// Leading numeral of an experience string such as "5 years"; 0 when absent.
pub fn experience_years(experience: &str) -> u32 {
    RE_LEADING_NUMERAL
        .find(experience)
        .map(|m| parse_saturating(m.as_str()))
        .unwrap_or(0)
}

/// Parses an ASCII digit run, clamping anything past `u32::MAX`.
fn parse_saturating(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
