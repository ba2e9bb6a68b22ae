use once_cell::unsync::OnceCell;
use reqwest::{Client, Error};
use shared::models::{
    AdminStatistics, AuthSession, JobCategory, JobPostRequest, JobPostResponse, SignInRequest,
    WorkerMetrics,
};

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<JobDashClient> = OnceCell::new();
}

/// Lightweight API client for the JobDash collaborators: identity,
/// statistics/metrics and job postings.
#[derive(Clone, Debug)]
pub struct JobDashClient {
    base_url: String,
    client: Client,
}

impl JobDashClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate with email/password credentials.
    pub async fn sign_in(&self, payload: &SignInRequest) -> Result<(), Error> {
        let url = self.api_url("auth/login");
        self.client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Fetch the decoded identity-token payload for the current session.
    pub async fn fetch_auth_session(&self) -> Result<AuthSession, Error> {
        let url = self.api_url("auth/session");
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Terminate the current session with the identity collaborator.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("auth/logout");
        self.client.post(url).send().await?.error_for_status()?;
        Ok(())
    }

    /// Aggregate claim statistics feeding the admin dashboard.
    pub async fn get_admin_statistics(&self) -> Result<AdminStatistics, Error> {
        let url = self.api_url("admin/statistics");
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Per-worker application metrics.
    pub async fn get_worker_metrics(&self) -> Result<WorkerMetrics, Error> {
        let url = self.api_url("metrics");
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Categories a job posting can be filed under.
    pub async fn get_categories(&self) -> Result<Vec<JobCategory>, Error> {
        let url = self.api_url("categories");
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Create a job posting.
    pub async fn post_job(&self, payload: &JobPostRequest) -> Result<JobPostResponse, Error> {
        let url = self.api_url("jobs");
        self.client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
