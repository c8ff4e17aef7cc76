//! Job search filter over the static job table.
//!
//! Each provided filter narrows the table independently (AND across filters).
//! Skills and keywords take comma-separated terms; a job passes such a filter
//! when any term matches. All comparisons are case-insensitive substring
//! checks. Blank filters are skipped.

use serde::{Deserialize, Serialize};

use crate::jobs::listing::JobListing;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub title: String,
    pub skills: String,
    pub keywords: String,
}

impl SearchQuery {
    pub fn new(title: &str, skills: &str, keywords: &str) -> Self {
        Self {
            title: title.to_string(),
            skills: skills.to_string(),
            keywords: keywords.to_string(),
        }
    }
}

pub fn search<'a>(jobs: &'a [JobListing], query: &SearchQuery) -> Vec<&'a JobListing> {
    let title = query.title.trim().to_lowercase();
    let skill_terms = split_terms(&query.skills);
    let keyword_terms = split_terms(&query.keywords);

    jobs.iter()
        .filter(|job| title.is_empty() || job.title.to_lowercase().contains(&title))
        .filter(|job| skill_terms.is_empty() || matches_skills(job, &skill_terms))
        .filter(|job| keyword_terms.is_empty() || matches_keywords(job, &keyword_terms))
        .collect()
}

/// Label rendered into the job count element.
pub fn count_label(count: usize) -> String {
    format!("{count} jobs found")
}

fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

fn matches_skills(job: &JobListing, terms: &[String]) -> bool {
    terms.iter().any(|term| {
        job.skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(term.as_str()))
    })
}

fn matches_keywords(job: &JobListing, terms: &[String]) -> bool {
    let title = job.title.to_lowercase();
    let company = job.company.to_lowercase();
    let location = job.location.to_lowercase();
    terms.iter().any(|term| {
        title.contains(term.as_str())
            || company.contains(term.as_str())
            || location.contains(term.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::listing::job_database;

    fn titles(results: &[&JobListing]) -> Vec<String> {
        results.iter().map(|j| j.title.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_full_table() {
        let jobs = job_database();
        assert_eq!(search(&jobs, &SearchQuery::default()).len(), 8);
    }

    #[test]
    fn test_react_skill_matches_five_of_eight() {
        let jobs = job_database();
        let results = search(&jobs, &SearchQuery::new("", "react", ""));
        assert_eq!(results.len(), 5);
        assert!(results
            .iter()
            .all(|j| j.skills.iter().any(|s| s.to_lowercase().contains("react"))));
    }

    #[test]
    fn test_skill_present_everywhere_returns_full_table() {
        let jobs = job_database();
        assert_eq!(search(&jobs, &SearchQuery::new("", "s", "")).len(), 8);
    }

    #[test]
    fn test_absent_skill_returns_nothing() {
        let jobs = job_database();
        let results = search(&jobs, &SearchQuery::new("", "cobol", ""));
        assert!(results.is_empty());
        assert_eq!(count_label(results.len()), "0 jobs found");
    }

    #[test]
    fn test_title_is_case_insensitive() {
        let jobs = job_database();
        let results = search(&jobs, &SearchQuery::new("FRONTEND", "", ""));
        assert_eq!(
            titles(&results),
            vec!["Senior Frontend Developer", "Frontend Engineer"]
        );
    }

    #[test]
    fn test_filters_combine_with_and() {
        let jobs = job_database();
        let results = search(&jobs, &SearchQuery::new("engineer", "docker", ""));
        assert_eq!(titles(&results), vec!["Software Engineer"]);
    }

    #[test]
    fn test_comma_terms_match_any() {
        let jobs = job_database();
        let results = search(&jobs, &SearchQuery::new("", "vue, django", ""));
        assert_eq!(
            titles(&results),
            vec!["JavaScript Developer", "Software Engineer"]
        );
    }

    #[test]
    fn test_keywords_match_company_and_location() {
        let jobs = job_database();
        let remote = search(&jobs, &SearchQuery::new("", "", "remote"));
        assert_eq!(titles(&remote), vec!["React Developer"]);
        let company = search(&jobs, &SearchQuery::new("", "", "techflow"));
        assert_eq!(titles(&company), vec!["Software Engineer"]);
    }

    #[test]
    fn test_blank_terms_are_skipped() {
        let jobs = job_database();
        assert_eq!(search(&jobs, &SearchQuery::new("  ", " , ", "")).len(), 8);
    }
}
