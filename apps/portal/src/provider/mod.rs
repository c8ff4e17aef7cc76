//! Data provider: the seam between the portal and whatever backend serves
//! accounts, resumes and jobs.
//!
//! Default: `MockDataProvider` (canned data after fixed delays).
//! `AppState` holds an `Arc<dyn DataProvider>`, so tests can substitute a
//! provider that fails or resolves instantly.

pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::jobs::listing::JobListing;
use crate::jobs::search::SearchQuery;
use crate::resume::record::ResumeRecord;
use crate::resume::upload::FileMeta;

pub use mock::{MockDataProvider, ProviderDelays};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    #[allow(dead_code)]
    pub password: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Employer-side posting request.
#[derive(Debug, Clone, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedJob {
    pub id: i64,
    #[serde(flatten)]
    pub listing: JobListing,
}

#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> ProviderResult<UserAccount>;

    async fn signup(&self, request: &SignupRequest) -> ProviderResult<UserAccount>;

    /// Processes an uploaded file into a resume record.
    async fn upload_resume(&self, file: &FileMeta) -> ProviderResult<ResumeRecord>;

    async fn get_jobs(&self, query: &SearchQuery) -> ProviderResult<Vec<JobListing>>;

    async fn create_job(&self, draft: &JobDraft) -> ProviderResult<CreatedJob>;
}
