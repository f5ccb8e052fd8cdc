use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::post::PostGateway;
use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::auth::LoginInteractor;
use crate::application::interactors::post::{
    AddCommentInteractor, CreatePostInteractor, DeletePostInteractor, GetPostInteractor, LikePostInteractor,
    ListPostsInteractor, RemoveCommentInteractor, UnlikePostInteractor,
};
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, DeleteAccountInteractor, GetGithubReposInteractor,
    GetMyProfileInteractor, GetProfileByUserInteractor, ListProfilesInteractor, RemoveEducationInteractor,
    RemoveExperienceInteractor, UpsertProfileInteractor,
};
use crate::application::interactors::users::{GetCurrentUserInteractor, RegisterUserInteractor};
use crate::application::interface::crypto::{CredentialsHasher, TokenIssuer};
use crate::application::interface::github::GithubClient;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub github: Arc<dyn GithubClient>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// RegisterUserInteractor
#[async_trait]
impl FromAppState for RegisterUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());

        Ok(RegisterUserInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            state.hasher.clone(),
            state.tokens.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for RegisterUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RegisterUserInteractor::from_app_state(&app_state).await
    }
}

// GetCurrentUserInteractor
#[async_trait]
impl FromAppState for GetCurrentUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session);

        Ok(GetCurrentUserInteractor::new(Arc::new(user_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetCurrentUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetCurrentUserInteractor::from_app_state(&app_state).await
    }
}

// LoginInteractor
#[async_trait]
impl FromAppState for LoginInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session);

        Ok(LoginInteractor::new(
            Arc::new(user_gateway),
            state.hasher.clone(),
            state.tokens.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for LoginInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        LoginInteractor::from_app_state(&app_state).await
    }
}

// UpsertProfileInteractor
#[async_trait]
impl FromAppState for UpsertProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(UpsertProfileInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UpsertProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        UpsertProfileInteractor::from_app_state(&app_state).await
    }
}

// GetMyProfileInteractor
#[async_trait]
impl FromAppState for GetMyProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetMyProfileInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetMyProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetMyProfileInteractor::from_app_state(&app_state).await
    }
}

// ListProfilesInteractor
#[async_trait]
impl FromAppState for ListProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(ListProfilesInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for ListProfilesInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        ListProfilesInteractor::from_app_state(&app_state).await
    }
}

// GetProfileByUserInteractor
#[async_trait]
impl FromAppState for GetProfileByUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetProfileByUserInteractor::new(Arc::new(profile_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetProfileByUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetProfileByUserInteractor::from_app_state(&app_state).await
    }
}

// DeleteAccountInteractor
#[async_trait]
impl FromAppState for DeleteAccountInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(DeleteAccountInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway),
            Arc::new(profile_gateway),
            Arc::new(user_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeleteAccountInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        DeleteAccountInteractor::from_app_state(&app_state).await
    }
}

// AddExperienceInteractor
#[async_trait]
impl FromAppState for AddExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(AddExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for AddExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        AddExperienceInteractor::from_app_state(&app_state).await
    }
}

// RemoveExperienceInteractor
#[async_trait]
impl FromAppState for RemoveExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(RemoveExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RemoveExperienceInteractor::from_app_state(&app_state).await
    }
}

// AddEducationInteractor
#[async_trait]
impl FromAppState for AddEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(AddEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for AddEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        AddEducationInteractor::from_app_state(&app_state).await
    }
}

// RemoveEducationInteractor
#[async_trait]
impl FromAppState for RemoveEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(RemoveEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RemoveEducationInteractor::from_app_state(&app_state).await
    }
}

// GetGithubReposInteractor
#[async_trait]
impl FromAppState for GetGithubReposInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        Ok(GetGithubReposInteractor::new(state.github.clone()))
    }
}

impl<S> FromRequestParts<S> for GetGithubReposInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetGithubReposInteractor::from_app_state(&app_state).await
    }
}

// CreatePostInteractor
#[async_trait]
impl FromAppState for CreatePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(CreatePostInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for CreatePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        CreatePostInteractor::from_app_state(&app_state).await
    }
}

// ListPostsInteractor
#[async_trait]
impl FromAppState for ListPostsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(ListPostsInteractor::new(Arc::new(post_gateway)))
    }
}

impl<S> FromRequestParts<S> for ListPostsInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        ListPostsInteractor::from_app_state(&app_state).await
    }
}

// GetPostInteractor
#[async_trait]
impl FromAppState for GetPostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(GetPostInteractor::new(Arc::new(post_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetPostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetPostInteractor::from_app_state(&app_state).await
    }
}

// DeletePostInteractor
#[async_trait]
impl FromAppState for DeletePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(DeletePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeletePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        DeletePostInteractor::from_app_state(&app_state).await
    }
}

// LikePostInteractor
#[async_trait]
impl FromAppState for LikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(LikePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for LikePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        LikePostInteractor::from_app_state(&app_state).await
    }
}

// UnlikePostInteractor
#[async_trait]
impl FromAppState for UnlikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(UnlikePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UnlikePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        UnlikePostInteractor::from_app_state(&app_state).await
    }
}

// AddCommentInteractor
#[async_trait]
impl FromAppState for AddCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(AddCommentInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for AddCommentInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        AddCommentInteractor::from_app_state(&app_state).await
    }
}

// RemoveCommentInteractor
#[async_trait]
impl FromAppState for RemoveCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(RemoveCommentInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveCommentInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        RemoveCommentInteractor::from_app_state(&app_state).await
    }
}
