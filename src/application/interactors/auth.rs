use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::{LoginDTO, TokenDTO};
use crate::application::interface::crypto::{CredentialsHasher, TokenIssuer};
use crate::application::interface::gateway::user::UserReader;

#[derive(Clone)]
pub struct LoginInteractor {
    user_reader: Arc<dyn UserReader>,
    hasher: Arc<dyn CredentialsHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginInteractor {
    pub fn new(
        user_reader: Arc<dyn UserReader>,
        hasher: Arc<dyn CredentialsHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            user_reader,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, dto: LoginDTO) -> AppResult<TokenDTO> {
        let user = self.user_reader.find_by_email(&dto.email).await?.ok_or_else(|| {
            warn!("Login attempt with non-existent email: {}", dto.email);
            AppError::InvalidCredentials
        })?;
        let is_valid = self.hasher.verify_password(&dto.password, &user.password).await?;
        if !is_valid {
            warn!("Invalid password for user: {}", user.email);
            return Err(AppError::InvalidCredentials);
        }
        let token = self.tokens.sign(&user.id)?;
        info!("User {} logged in successfully", user.id.value);
        Ok(TokenDTO { token })
    }
}
