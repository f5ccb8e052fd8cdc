use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

/// A profile together with the owner's denormalized display fields,
/// produced by joining the users table on read.
#[derive(Debug, Clone)]
pub struct ProfileWithAuthor {
    pub profile: Profile,
    pub name: String,
    pub avatar: String,
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user(&self, user_id: &Id<User>) -> AppResult<Option<ProfileWithAuthor>>;
    async fn list_all(&self) -> AppResult<Vec<ProfileWithAuthor>>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>>;
    async fn update(&self, profile: Profile) -> AppResult<Id<Profile>>;
    async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()>;
}
