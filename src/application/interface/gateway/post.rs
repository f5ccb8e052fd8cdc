use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;

#[async_trait]
pub trait PostReader: Send + Sync {
    async fn find_by_id(&self, post_id: &Id<Post>) -> AppResult<Option<Post>>;
    /// All posts, newest first.
    async fn list_all(&self) -> AppResult<Vec<Post>>;
}

#[async_trait]
pub trait PostWriter: Send + Sync {
    async fn insert(&self, post: Post) -> AppResult<Id<Post>>;
    /// Writes back the embedded like and comment lists in one row update.
    async fn update_engagement(&self, post: &Post) -> AppResult<()>;
    async fn delete(&self, post_id: &Id<Post>) -> AppResult<()>;
    async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()>;
}
