//! Canned analysis tables shown once a resume has been processed.

use serde::Serialize;

/// Summary cards at the top of the analysis section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub skills_matched: &'static str,
    pub job_matches: &'static str,
    pub overall_match: &'static str,
}

pub const SUMMARY: AnalysisSummary = AnalysisSummary {
    skills_matched: "8/12",
    job_matches: "15",
    overall_match: "87%",
};

/// Skill levels on a 0–10 scale, in chart axis order.
pub const SKILL_LEVELS: &[(&str, u8)] = &[
    ("JavaScript", 9),
    ("React", 8),
    ("HTML/CSS", 9),
    ("Python", 6),
    ("Node.js", 4),
    ("TypeScript", 5),
    ("AWS", 3),
    ("MongoDB", 5),
];

pub const LEGEND_SIZE: usize = 6;

/// Top skills by level, highest first. Ties keep axis order.
pub fn legend_entries() -> Vec<(&'static str, u8)> {
    let mut sorted = SKILL_LEVELS.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(LEGEND_SIZE);
    sorted
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopMatch {
    pub title: &'static str,
    pub company: &'static str,
    pub match_pct: u8,
    pub location: &'static str,
    pub salary: &'static str,
    pub job_type: &'static str,
}

pub const TOP_MATCHES: &[TopMatch] = &[
    TopMatch {
        title: "Senior Frontend Developer",
        company: "TechCorp Solutions",
        match_pct: 94,
        location: "San Francisco, CA",
        salary: "$120,000 - $150,000",
        job_type: "Full-time",
    },
    TopMatch {
        title: "React Developer",
        company: "InnovateLabs",
        match_pct: 89,
        location: "Remote",
        salary: "$100,000 - $130,000",
        job_type: "Full-time",
    },
    TopMatch {
        title: "Full Stack JavaScript Developer",
        company: "StartupXYZ",
        match_pct: 85,
        location: "New York, NY",
        salary: "$95,000 - $125,000",
        job_type: "Full-time",
    },
    TopMatch {
        title: "Frontend Engineer",
        company: "Digital Solutions Inc",
        match_pct: 82,
        location: "Austin, TX",
        salary: "$90,000 - $115,000",
        job_type: "Full-time",
    },
    TopMatch {
        title: "UI/UX Developer",
        company: "DesignFirst",
        match_pct: 78,
        location: "Seattle, WA",
        salary: "$85,000 - $110,000",
        job_type: "Full-time",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
}

impl Urgency {
    pub fn colour(self) -> &'static str {
        match self {
            Urgency::High => "red",
            Urgency::Medium => "yellow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    pub skill: &'static str,
    pub reason: &'static str,
    pub resources: &'static [&'static str],
    pub urgency: Urgency,
}

pub const SKILL_GAPS: &[SkillGap] = &[
    SkillGap {
        skill: "TypeScript",
        reason: "Required for 80% of matching positions",
        resources: &["TypeScript Handbook", "Online Course"],
        urgency: Urgency::High,
    },
    SkillGap {
        skill: "AWS Cloud Services",
        reason: "Growing demand in cloud-first companies",
        resources: &["AWS Certification", "Cloud Practitioner"],
        urgency: Urgency::High,
    },
    SkillGap {
        skill: "Docker & Kubernetes",
        reason: "DevOps skills increasingly valuable",
        resources: &["Docker Documentation", "K8s Tutorials"],
        urgency: Urgency::Medium,
    },
    SkillGap {
        skill: "GraphQL",
        reason: "Modern API development standard",
        resources: &["GraphQL Tutorial", "Apollo Docs"],
        urgency: Urgency::Medium,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_is_top_six_descending() {
        let legend = legend_entries();
        assert_eq!(legend.len(), 6);
        assert_eq!(legend[0], ("JavaScript", 9));
        assert_eq!(legend[1], ("HTML/CSS", 9));
        assert!(legend.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(!legend.iter().any(|(skill, _)| *skill == "AWS"));
    }

    #[test]
    fn test_levels_on_ten_point_scale() {
        assert!(SKILL_LEVELS.iter().all(|(_, level)| *level <= 10));
    }
}
