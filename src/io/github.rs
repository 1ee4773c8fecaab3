use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::model::config::GithubConfig;
use crate::model::repo::RepoSummary;

/// Why a repository fetch failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("GitHub user not found")]
    NotFound,
    #[error("GitHub request failed: {0}")]
    RequestFailed(String),
}

/// Something that can list a user's public repositories
pub trait RepoSource: Send + Sync {
    fn fetch_repos(&self, username: &str) -> Result<Vec<RepoSummary>, RepoError>;
}

/// Blocking client for the GitHub REST API
pub struct GithubClient {
    client: Client,
    api_base: Url,
    per_page: u8,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, RepoError> {
        let api_base = Url::parse(&config.api_base).map_err(|e| {
            RepoError::RequestFailed(format!("invalid api_base '{}': {}", config.api_base, e))
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RepoError::RequestFailed(format!("HTTP client error: {}", e)))?;
        Ok(GithubClient {
            client,
            api_base,
            per_page: config.per_page,
        })
    }

    /// `{api_base}/users/{username}/repos?sort=updated&per_page=N`, with the
    /// username encoded as a single path segment
    pub fn repos_url(&self, username: &str) -> Result<Url, RepoError> {
        // "." and ".." would be dropped as path segments; no such account exists
        if username.chars().all(|c| c == '.') {
            return Err(RepoError::NotFound);
        }
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                RepoError::RequestFailed(format!("api_base '{}' cannot take a path", self.api_base))
            })?
            .pop_if_empty()
            .extend(["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.per_page.to_string());
        Ok(url)
    }
}

impl RepoSource for GithubClient {
    fn fetch_repos(&self, username: &str) -> Result<Vec<RepoSummary>, RepoError> {
        let url = self.repos_url(username.trim())?;
        log::info!("event=repo_fetch module=github status=start url={}", url);

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| RepoError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            log::info!("event=repo_fetch module=github status=not_found");
            return Err(RepoError::NotFound);
        }
        if !status.is_success() {
            return Err(RepoError::RequestFailed(format!(
                "GitHub API error: {}",
                status.as_u16()
            )));
        }

        let repos: Vec<RepoSummary> = resp
            .json()
            .map_err(|e| RepoError::RequestFailed(format!("invalid response body: {}", e)))?;
        log::info!(
            "event=repo_fetch module=github status=ok count={}",
            repos.len()
        );
        Ok(repos)
    }
}
