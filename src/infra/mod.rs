use crate::adapter::crypto::argon2::ArgonPasswordHasher;
use crate::adapter::crypto::jwt::JwtTokenIssuer;
use crate::adapter::github::client::GithubHttpClient;
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;
use std::sync::Arc;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

pub(crate) fn argon2_password_hasher() -> ArgonPasswordHasher {
    ArgonPasswordHasher::default()
}

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;
    let password_hasher = argon2_password_hasher();
    let token_issuer = JwtTokenIssuer::new(&config.jwt);
    let github_client = GithubHttpClient::new(&config.github);

    Ok(AppState {
        pool,
        hasher: Arc::new(password_hasher),
        tokens: Arc::new(token_issuer),
        github: Arc::new(github_client),
        config: Arc::new(config.clone()),
    })
}
