use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use tracing::warn;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::github::GithubClient;
use crate::infra::config::GithubConfig;

/// Thin proxy over the GitHub REST API for the public-repos widget on
/// profile pages.
#[derive(Clone)]
pub struct GithubHttpClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GithubHttpClient {
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl GithubClient for GithubHttpClient {
    async fn recent_repos(&self, username: &str) -> AppResult<serde_json::Value> {
        let url = format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc",
            self.api_url, username
        );
        let mut request = self.client.get(&url).header(USER_AGENT, "devconnect-backend");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            warn!("GitHub repos lookup for '{}' returned {}", username, response.status());
            return Err(AppError::GithubUserNotFound);
        }
        Ok(response.json().await?)
    }
}
