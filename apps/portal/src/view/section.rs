use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A logical page within the applicant portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    SearchJobs,
    JobExplorer,
    Profile,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::SearchJobs,
        Section::JobExplorer,
        Section::Profile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::SearchJobs => "search-jobs",
            Section::JobExplorer => "job-explorer",
            Section::Profile => "profile",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard-section",
            Section::SearchJobs => "search-jobs-section",
            Section::JobExplorer => "job-explorer-section",
            Section::Profile => "profile-section",
        }
    }

    pub fn nav_id(self) -> &'static str {
        match self {
            Section::Dashboard => "nav-dashboard",
            Section::SearchJobs => "nav-search-jobs",
            Section::JobExplorer => "nav-job-explorer",
            Section::Profile => "nav-profile",
        }
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sections() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive_and_exact() {
        assert!("Dashboard".parse::<Section>().is_err());
        assert!("search_jobs".parse::<Section>().is_err());
        assert_eq!(
            "settings".parse::<Section>(),
            Err(UnknownSection("settings".to_string()))
        );
    }

    #[test]
    fn test_ids_follow_page_convention() {
        for section in Section::ALL {
            assert_eq!(section.container_id(), format!("{section}-section"));
            assert_eq!(section.nav_id(), format!("nav-{section}"));
        }
    }
}
