use async_trait::async_trait;

use crate::application::app_error::AppResult;

/// Read-only view of the GitHub API used by the profile routes.
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// The user's five most recently created public repos, as returned by
    /// the GitHub API (passed through to clients untouched).
    async fn recent_repos(&self, username: &str) -> AppResult<serde_json::Value>;
}
