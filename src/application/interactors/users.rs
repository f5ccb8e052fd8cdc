use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::TokenDTO;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, UserDTO};
use crate::application::interface::crypto::{CredentialsHasher, TokenIssuer};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct RegisterUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    hasher: Arc<dyn CredentialsHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl RegisterUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        hasher: Arc<dyn CredentialsHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<TokenDTO> {
        if self.user_reader.exists_by_email(&dto.email).await? {
            warn!("Registration attempt with taken email: {}", dto.email);
            return Err(AppError::EmailTaken);
        }
        let avatar = User::gravatar_url(&dto.email);
        let hashed = self.hasher.hash_password(&dto.password).await?;
        let user = User::new(dto.name, dto.email, hashed, avatar);
        let user_id = self.user_writer.insert(user).await?;
        self.db_session.commit().await?;
        let token = self.tokens.sign(&user_id)?;
        info!("User {} registered", user_id.value);
        Ok(TokenDTO { token })
    }
}

#[derive(Clone)]
pub struct GetCurrentUserInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetCurrentUserInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<UserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        Ok(user.into())
    }
}
