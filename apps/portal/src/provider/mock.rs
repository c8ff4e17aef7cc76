use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::jobs::listing::{job_database, JobListing};
use crate::jobs::search::{search, SearchQuery};
use crate::provider::{
    CreatedJob, Credentials, DataProvider, JobDraft, ProviderError, ProviderResult,
    SignupRequest, UserAccount,
};
use crate::resume::record::ResumeRecord;
use crate::resume::upload::FileMeta;

const DEFAULT_ROLE: &str = "applicant";

#[derive(Debug, Clone, Copy)]
pub struct ProviderDelays {
    /// Login, signup and job endpoints.
    pub api: Duration,
    /// Resume processing.
    pub resume: Duration,
}

impl Default for ProviderDelays {
    fn default() -> Self {
        Self {
            api: Duration::from_millis(1000),
            resume: Duration::from_millis(2000),
        }
    }
}

/// Resolves canned data after fixed delays. Never fails on valid input.
#[derive(Debug, Clone, Default)]
pub struct MockDataProvider {
    delays: ProviderDelays,
}

impl MockDataProvider {
    pub fn new(delays: ProviderDelays) -> Self {
        Self { delays }
    }

    async fn settle(&self, delay: Duration, op: &'static str) {
        debug!(op, delay_ms = delay.as_millis() as u64, "mock provider call");
        tokio::time::sleep(delay).await;
    }
}

fn synthetic_id() -> i64 {
    Utc::now().timestamp_millis()
}

#[async_trait]
impl DataProvider for MockDataProvider {
    async fn login(&self, credentials: &Credentials) -> ProviderResult<UserAccount> {
        self.settle(self.delays.api, "login").await;
        let username = credentials.username.trim();
        if username.is_empty() {
            return Err(ProviderError::Rejected("username is required".to_string()));
        }
        Ok(UserAccount {
            id: 1,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role: credentials
                .role
                .clone()
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }

    async fn signup(&self, request: &SignupRequest) -> ProviderResult<UserAccount> {
        self.settle(self.delays.api, "signup").await;
        if request.username.trim().is_empty() || request.email.trim().is_empty() {
            return Err(ProviderError::Rejected(
                "username and email are required".to_string(),
            ));
        }
        Ok(UserAccount {
            id: synthetic_id(),
            username: request.username.trim().to_string(),
            email: request.email.trim().to_string(),
            role: request
                .role
                .clone()
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }

    async fn upload_resume(&self, file: &FileMeta) -> ProviderResult<ResumeRecord> {
        self.settle(self.delays.resume, "upload_resume").await;
        debug!(file = %file.name, size = file.size, "resume processed (synthetic)");
        Ok(ResumeRecord::synthetic())
    }

    async fn get_jobs(&self, query: &SearchQuery) -> ProviderResult<Vec<JobListing>> {
        self.settle(self.delays.api, "get_jobs").await;
        let jobs = job_database();
        Ok(search(&jobs, query).into_iter().cloned().collect())
    }

    async fn create_job(&self, draft: &JobDraft) -> ProviderResult<CreatedJob> {
        self.settle(self.delays.api, "create_job").await;
        if draft.title.trim().is_empty() || draft.company.trim().is_empty() {
            return Err(ProviderError::Rejected(
                "title and company are required".to_string(),
            ));
        }
        Ok(CreatedJob {
            id: synthetic_id(),
            listing: JobListing {
                title: draft.title.clone(),
                company: draft.company.clone(),
                location: draft.location.clone(),
                match_score: 0,
                salary: draft.salary.clone(),
                skills: draft.skills.clone(),
                description: draft.description.clone(),
            },
        })
    }
}
