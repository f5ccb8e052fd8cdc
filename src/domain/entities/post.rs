use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// A short text update. Author name and avatar are denormalized into the
/// post at creation time; likes and comments are embedded lists mutated
/// in memory and written back in one row update. Like uniqueness is a
/// linear scan over the loaded post, not a schema constraint.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Id<Post>,
    pub user_id: Id<User>,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
    pub liked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(user_id: Id<User>, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Id::generate(),
            user_id,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: &Id<User>) -> bool {
        self.user_id == *user_id
    }

    /// Adds a like for the user unless one already exists. Returns whether
    /// the like list changed.
    pub fn like(&mut self, user_id: &Id<User>) -> bool {
        if self.likes.iter().any(|like| like.user == user_id.value) {
            return false;
        }
        self.likes.insert(
            0,
            Like {
                user: user_id.value,
                liked_at: Utc::now(),
            },
        );
        true
    }

    /// Removes the user's like. Returns false when the post was never
    /// liked by that user.
    pub fn unlike(&mut self, user_id: &Id<User>) -> bool {
        let before = self.likes.len();
        self.likes.retain(|like| like.user != user_id.value);
        self.likes.len() < before
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn find_comment(&self, comment_id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == comment_id)
    }

    pub fn remove_comment(&mut self, comment_id: Uuid) {
        self.comments.retain(|comment| comment.id != comment_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_post() -> Post {
        Post::new(
            Id::generate(),
            "hello world".to_string(),
            "john".to_string(),
            "https://gravatar.example/abc".to_string(),
        )
    }

    fn build_comment(user: Uuid, text: &str) -> Comment {
        Comment {
            id: Uuid::now_v7(),
            user,
            text: text.to_string(),
            name: "john".to_string(),
            avatar: "https://gravatar.example/abc".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_like_adds_entry() {
        let mut post = build_post();
        let liker: Id<User> = Id::generate();

        assert!(post.like(&liker));
        assert_eq!(post.likes.len(), 1);
        assert_eq!(post.likes[0].user, liker.value);
    }

    #[test]
    fn test_like_twice_is_noop() {
        let mut post = build_post();
        let liker: Id<User> = Id::generate();

        assert!(post.like(&liker));
        let likes_before = post.likes.clone();

        assert!(!post.like(&liker));
        assert_eq!(post.likes, likes_before);
    }

    #[test]
    fn test_unlike_removes_only_that_user() {
        let mut post = build_post();
        let first: Id<User> = Id::generate();
        let second: Id<User> = Id::generate();
        post.like(&first);
        post.like(&second);

        assert!(post.unlike(&first));
        assert_eq!(post.likes.len(), 1);
        assert_eq!(post.likes[0].user, second.value);
    }

    #[test]
    fn test_unlike_never_liked_returns_false() {
        let mut post = build_post();
        let user: Id<User> = Id::generate();

        assert!(!post.unlike(&user));
    }

    #[test]
    fn test_add_comment_prepends() {
        let mut post = build_post();
        let user = Uuid::now_v7();
        post.add_comment(build_comment(user, "first"));
        post.add_comment(build_comment(user, "second"));

        assert_eq!(post.comments[0].text, "second");
        assert_eq!(post.comments[1].text, "first");
    }

    #[test]
    fn test_remove_comment_by_id() {
        let mut post = build_post();
        let user = Uuid::now_v7();
        let comment = build_comment(user, "bye");
        let comment_id = comment.id;
        post.add_comment(build_comment(user, "stay"));
        post.add_comment(comment);

        assert!(post.find_comment(comment_id).is_some());
        post.remove_comment(comment_id);
        assert!(post.find_comment(comment_id).is_none());
        assert_eq!(post.comments.len(), 1);
    }
}
