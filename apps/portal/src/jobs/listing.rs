use serde::{Deserialize, Serialize};

/// A job posting with its precomputed match score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_score: u8, // 0 – 100
    pub salary: String,
    pub skills: Vec<String>,
    pub description: String,
}

/// Colour tier of the match-score badge on a job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchBadge {
    Green,
    Yellow,
    Red,
}

impl MatchBadge {
    pub fn for_score(score: u8) -> Self {
        if score >= 90 {
            MatchBadge::Green
        } else if score >= 80 {
            MatchBadge::Yellow
        } else {
            MatchBadge::Red
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            MatchBadge::Green => "bg-green-100 text-green-800",
            MatchBadge::Yellow => "bg-yellow-100 text-yellow-800",
            MatchBadge::Red => "bg-red-100 text-red-800",
        }
    }
}

impl JobListing {
    pub fn badge(&self) -> MatchBadge {
        MatchBadge::for_score(self.match_score)
    }
}

/// Number of rows shown by the job explorer.
pub const EXPLORER_LIMIT: usize = 5;

struct Row {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    match_score: u8,
    salary: &'static str,
    skills: &'static [&'static str],
    description: &'static str,
}

const JOB_ROWS: &[Row] = &[
    Row {
        title: "Senior Frontend Developer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        match_score: 94,
        salary: "120k-150k",
        skills: &["React", "JavaScript", "TypeScript", "CSS", "Node.js"],
        description: "Join our team to build next-generation web applications using modern technologies.",
    },
    Row {
        title: "React Developer",
        company: "StartupXYZ",
        location: "Remote",
        match_score: 91,
        salary: "90k-120k",
        skills: &["React", "JavaScript", "Redux", "HTML", "CSS"],
        description: "Looking for a passionate React developer to join our growing startup.",
    },
    Row {
        title: "Full Stack Engineer",
        company: "WebSolutions Ltd",
        location: "New York, NY",
        match_score: 88,
        salary: "100k-130k",
        skills: &["React", "Node.js", "MongoDB", "Express", "AWS"],
        description: "Full stack position working on enterprise-level web applications.",
    },
    Row {
        title: "UI/UX Developer",
        company: "DesignHub Co.",
        location: "Austin, TX",
        match_score: 85,
        salary: "95k-125k",
        skills: &["HTML", "CSS", "JavaScript", "Figma", "Sass"],
        description: "Create beautiful and functional user interfaces for our design platform.",
    },
    Row {
        title: "JavaScript Developer",
        company: "CodeCraft Inc.",
        location: "Seattle, WA",
        match_score: 82,
        salary: "85k-110k",
        skills: &["JavaScript", "Vue.js", "Node.js", "SQL", "Git"],
        description: "Work with cutting-edge JavaScript technologies in a collaborative environment.",
    },
    Row {
        title: "Frontend Engineer",
        company: "WebTech Solutions",
        location: "Boston, MA",
        match_score: 89,
        salary: "105k-135k",
        skills: &["React", "TypeScript", "GraphQL", "CSS", "Jest"],
        description: "Build scalable frontend solutions for enterprise clients.",
    },
    Row {
        title: "Web Developer",
        company: "Digital Innovations",
        location: "Chicago, IL",
        match_score: 79,
        salary: "70k-90k",
        skills: &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
        description: "Develop and maintain websites for various clients across industries.",
    },
    Row {
        title: "Software Engineer",
        company: "TechFlow Inc.",
        location: "Denver, CO",
        match_score: 87,
        salary: "110k-140k",
        skills: &["React", "Python", "Django", "PostgreSQL", "Docker"],
        description: "Full stack development position with focus on web technologies.",
    },
];

/// The static job table, in display order.
pub fn job_database() -> Vec<JobListing> {
    JOB_ROWS
        .iter()
        .map(|row| JobListing {
            title: row.title.to_string(),
            company: row.company.to_string(),
            location: row.location.to_string(),
            match_score: row.match_score,
            salary: row.salary.to_string(),
            skills: row.skills.iter().map(|s| s.to_string()).collect(),
            description: row.description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_eight_rows() {
        assert_eq!(job_database().len(), 8);
    }

    #[test]
    fn test_scores_within_bounds() {
        assert!(job_database().iter().all(|j| j.match_score <= 100));
    }

    #[test]
    fn test_badge_tiers() {
        assert_eq!(MatchBadge::for_score(94), MatchBadge::Green);
        assert_eq!(MatchBadge::for_score(90), MatchBadge::Green);
        assert_eq!(MatchBadge::for_score(89), MatchBadge::Yellow);
        assert_eq!(MatchBadge::for_score(80), MatchBadge::Yellow);
        assert_eq!(MatchBadge::for_score(79), MatchBadge::Red);
    }
}
