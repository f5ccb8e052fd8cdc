use chrono::{DateTime, Utc};

use crate::domain::entities::post::{Comment, Like, Post};

#[derive(Debug, Clone)]
pub struct CreatePostDTO {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct PostActionDTO {
    pub user_id: String,
    pub post_id: String,
}

#[derive(Debug, Clone)]
pub struct AddCommentDTO {
    pub user_id: String,
    pub post_id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct RemoveCommentDTO {
    pub user_id: String,
    pub post_id: String,
    pub comment_id: String,
}

#[derive(Debug, Clone)]
pub struct PostDTO {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<LikeDTO>,
    pub comments: Vec<CommentDTO>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LikeDTO {
    pub user: String,
    pub liked_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentDTO {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<Like> for LikeDTO {
    fn from(like: Like) -> Self {
        Self {
            user: like.user.to_string(),
            liked_at: like.liked_at,
        }
    }
}

impl From<Comment> for CommentDTO {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user: comment.user.to_string(),
            text: comment.text,
            name: comment.name,
            avatar: comment.avatar,
            created_at: comment.created_at,
        }
    }
}

impl From<Post> for PostDTO {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.value.to_string(),
            user_id: post.user_id.value.to_string(),
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
            created_at: post.created_at,
        }
    }
}
