use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::dto::post::{CommentDTO, LikeDTO, PostDTO};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub user: String,
    pub liked_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<LikeDTO> for LikeResponse {
    fn from(like: LikeDTO) -> Self {
        Self {
            user: like.user,
            liked_at: like.liked_at,
        }
    }
}

impl From<CommentDTO> for CommentResponse {
    fn from(comment: CommentDTO) -> Self {
        Self {
            id: comment.id,
            user: comment.user,
            text: comment.text,
            name: comment.name,
            avatar: comment.avatar,
            created_at: comment.created_at,
        }
    }
}

impl From<PostDTO> for PostResponse {
    fn from(post: PostDTO) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
            created_at: post.created_at,
        }
    }
}
