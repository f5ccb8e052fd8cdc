use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[async_trait]
pub trait CredentialsHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> AppResult<String>;
    async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool>;
}

/// Signs and verifies the bearer tokens handed out on register/login.
pub trait TokenIssuer: Send + Sync {
    fn sign(&self, user_id: &Id<User>) -> AppResult<String>;
    fn verify(&self, token: &str) -> AppResult<Id<User>>;
}
