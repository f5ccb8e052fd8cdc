use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{Comment, Like, Post};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct PostGateway {
    session: SqlxSession,
}

impl PostGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_post(row: PgRow) -> AppResult<Post> {
        let likes: Json<Vec<Like>> = row.try_get("likes")?;
        let comments: Json<Vec<Comment>> = row.try_get("comments")?;
        Ok(Post {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            text: row.try_get("text")?,
            name: row.try_get("name")?,
            avatar: row.try_get("avatar")?,
            likes: likes.0,
            comments: comments.0,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl PostReader for PostGateway {
    async fn find_by_id(&self, post_id: &Id<Post>) -> AppResult<Option<Post>> {
        self.session
            .with_tx(|tx| {
                let post_id = post_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, text, name, avatar, likes, comments, created_at
                            FROM
                                posts
                            WHERE id = $1
                        "#,
                    )
                    .bind(&post_id)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    result.map(Self::map_post).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn list_all(&self) -> AppResult<Vec<Post>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, text, name, avatar, likes, comments, created_at
                            FROM
                                posts
                            ORDER BY created_at DESC
                        "#,
                    )
                    .fetch_all(tx.as_mut())
                    .await?;
                    rows.into_iter().map(Self::map_post).collect()
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl PostWriter for PostGateway {
    async fn insert(&self, post: Post) -> AppResult<Id<Post>> {
        self.session
            .with_tx(|tx| {
                let post = post.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO posts
                                (id, user_id, text, name, avatar, likes, comments, created_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&post.id.value)
                    .bind(&post.user_id.value)
                    .bind(&post.text)
                    .bind(&post.name)
                    .bind(&post.avatar)
                    .bind(Json(&post.likes))
                    .bind(Json(&post.comments))
                    .bind(&post.created_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update_engagement(&self, post: &Post) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let post_id = post.id.value;
                let likes = post.likes.clone();
                let comments = post.comments.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                posts
                            SET
                                likes = $2, comments = $3
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(&post_id)
                    .bind(Json(&likes))
                    .bind(Json(&comments))
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, post_id: &Id<Post>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let post_id = post_id.value;
                async move {
                    sqlx::query("DELETE FROM posts WHERE id = $1")
                        .bind(&post_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM posts WHERE user_id = $1")
                        .bind(&user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
