use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::post::{
    AddCommentDTO, CommentDTO, CreatePostDTO, LikeDTO, PostActionDTO, PostDTO, RemoveCommentDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{Comment, Post};
use crate::domain::entities::user::User;

fn parse_post_id(value: String) -> AppResult<Id<Post>> {
    // Malformed ids answer like unknown posts, matching the 404 contract.
    value.try_into().map_err(|_| AppError::PostNotFound)
}

#[derive(Clone)]
pub struct CreatePostInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl CreatePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: CreatePostDTO) -> AppResult<PostDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        let post = Post::new(user.id, dto.text, user.name, user.avatar);
        self.post_writer.insert(post.clone()).await?;
        self.db_session.commit().await?;
        info!("Post {} created", post.id.value);
        Ok(post.into())
    }
}

#[derive(Clone)]
pub struct ListPostsInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl ListPostsInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<PostDTO>> {
        let posts = self.post_reader.list_all().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct GetPostInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl GetPostInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<PostDTO> {
        let post_id = parse_post_id(dto.id)?;
        let post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        Ok(post.into())
    }
}

#[derive(Clone)]
pub struct DeletePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl DeletePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id = parse_post_id(dto.post_id)?;
        let post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        if !post.is_authored_by(&user_id) {
            return Err(AppError::NotAuthorized);
        }
        self.post_writer.delete(&post_id).await?;
        self.db_session.commit().await?;
        info!("Post {} removed", post_id.value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LikePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl LikePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    /// Liking an already-liked post is a no-op that returns the unchanged
    /// like set.
    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<Vec<LikeDTO>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id = parse_post_id(dto.post_id)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        if post.like(&user_id) {
            self.post_writer.update_engagement(&post).await?;
            self.db_session.commit().await?;
        }
        Ok(post.likes.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct UnlikePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl UnlikePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<Vec<LikeDTO>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id = parse_post_id(dto.post_id)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        if !post.unlike(&user_id) {
            return Err(AppError::PostNotLiked);
        }
        self.post_writer.update_engagement(&post).await?;
        self.db_session.commit().await?;
        Ok(post.likes.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct AddCommentInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl AddCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: AddCommentDTO) -> AppResult<Vec<CommentDTO>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        let post_id = parse_post_id(dto.post_id)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        post.add_comment(Comment {
            id: Uuid::now_v7(),
            user: user.id.value,
            text: dto.text,
            name: user.name,
            avatar: user.avatar,
            created_at: Utc::now(),
        });
        self.post_writer.update_engagement(&post).await?;
        self.db_session.commit().await?;
        Ok(post.comments.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct RemoveCommentInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl RemoveCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveCommentDTO) -> AppResult<Vec<CommentDTO>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id = parse_post_id(dto.post_id)?;
        let comment_id = Uuid::try_parse(&dto.comment_id).map_err(|_| AppError::CommentNotFound)?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::PostNotFound)?;
        let comment = post.find_comment(comment_id).ok_or(AppError::CommentNotFound)?;
        if comment.user != user_id.value {
            return Err(AppError::NotAuthorized);
        }
        post.remove_comment(comment_id);
        self.post_writer.update_engagement(&post).await?;
        self.db_session.commit().await?;
        Ok(post.comments.into_iter().map(Into::into).collect())
    }
}
