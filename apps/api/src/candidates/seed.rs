//! Reference candidate set served when no fixture file is configured.

use crate::models::candidate::Candidate;

fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn reference_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: 1,
            name: "Sarah Chen".to_string(),
            title: "Senior Data Scientist".to_string(),
            location: "San Francisco, CA".to_string(),
            experience: "5 years".to_string(),
            skills: skills(&[
                "Python",
                "Machine Learning",
                "SQL",
                "TensorFlow",
                "Data Analysis",
            ]),
            education: "Masters in Data Science from Stanford University".to_string(),
            summary: "Passionate data scientist with expertise in ML and AI solutions for fintech"
                .to_string(),
            match_score: 95,
        },
        Candidate {
            id: 2,
            name: "Marcus Johnson".to_string(),
            title: "Full Stack Developer".to_string(),
            location: "Austin, TX".to_string(),
            experience: "3 years".to_string(),
            skills: skills(&["React", "Node.js", "TypeScript", "AWS", "MongoDB"]),
            education: "Bachelor's in Computer Science from UT Austin".to_string(),
            summary: "Creative developer building scalable web applications with modern tech"
                .to_string(),
            match_score: 88,
        },
        Candidate {
            id: 3,
            name: "Elena Rodriguez".to_string(),
            title: "UX Designer".to_string(),
            location: "Remote".to_string(),
            experience: "4 years".to_string(),
            skills: skills(&[
                "Figma",
                "User Research",
                "Prototyping",
                "Design Systems",
                "Adobe Creative Suite",
            ]),
            education: "Bachelor's in Design from Art Institute".to_string(),
            summary: "User-centered designer creating intuitive digital experiences".to_string(),
            match_score: 82,
        },
        Candidate {
            id: 4,
            name: "David Park".to_string(),
            title: "Data Scientist".to_string(),
            location: "New York, NY".to_string(),
            experience: "3 years".to_string(),
            skills: skills(&["Python", "R", "SQL", "Machine Learning", "Statistics"]),
            education: "Bachelor's in Data Science from NYU".to_string(),
            summary: "Analytical data scientist with strong background in statistical modeling"
                .to_string(),
            match_score: 90,
        },
    ]
}
