use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWithAuthor, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile, SocialLinks};
use crate::domain::entities::user::User;

/// The embedded lists (skills, social, experience, education) live in
/// JSONB columns, so every profile mutation is one row write.
#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

const PROFILE_WITH_AUTHOR_COLUMNS: &str = r#"
    p.id, p.user_id, p.status, p.skills, p.company, p.website, p.location,
    p.bio, p.github_username, p.social, p.experience, p.education,
    p.created_at, p.updated_at, u.name, u.avatar
"#;

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_record(row: PgRow) -> AppResult<ProfileWithAuthor> {
        let skills: Json<Vec<String>> = row.try_get("skills")?;
        let social: Json<SocialLinks> = row.try_get("social")?;
        let experience: Json<Vec<Experience>> = row.try_get("experience")?;
        let education: Json<Vec<Education>> = row.try_get("education")?;
        Ok(ProfileWithAuthor {
            profile: Profile {
                id: Id::new(row.try_get("id")?),
                user_id: Id::new(row.try_get("user_id")?),
                status: row.try_get("status")?,
                skills: skills.0,
                company: row.try_get("company")?,
                website: row.try_get("website")?,
                location: row.try_get("location")?,
                bio: row.try_get("bio")?,
                github_username: row.try_get("github_username")?,
                social: social.0,
                experience: experience.0,
                education: education.0,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            },
            name: row.try_get("name")?,
            avatar: row.try_get("avatar")?,
        })
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user(&self, user_id: &Id<User>) -> AppResult<Option<ProfileWithAuthor>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let query = format!(
                        r#"
                            SELECT {PROFILE_WITH_AUTHOR_COLUMNS}
                            FROM profiles p
                            JOIN users u ON u.id = p.user_id
                            WHERE p.user_id = $1
                        "#
                    );
                    let result = sqlx::query(&query).bind(&user_id).fetch_optional(tx.as_mut()).await?;
                    result.map(Self::map_record).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn list_all(&self) -> AppResult<Vec<ProfileWithAuthor>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let query = format!(
                        r#"
                            SELECT {PROFILE_WITH_AUTHOR_COLUMNS}
                            FROM profiles p
                            JOIN users u ON u.id = p.user_id
                            ORDER BY p.created_at DESC
                        "#
                    );
                    let rows = sqlx::query(&query).fetch_all(tx.as_mut()).await?;
                    rows.into_iter().map(Self::map_record).collect()
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (id, user_id, status, skills, company, website, location,
                                 bio, github_username, social, experience, education,
                                 created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&profile.id.value)
                    .bind(&profile.user_id.value)
                    .bind(&profile.status)
                    .bind(Json(&profile.skills))
                    .bind(&profile.company)
                    .bind(&profile.website)
                    .bind(&profile.location)
                    .bind(&profile.bio)
                    .bind(&profile.github_username)
                    .bind(Json(&profile.social))
                    .bind(Json(&profile.experience))
                    .bind(Json(&profile.education))
                    .bind(&profile.created_at)
                    .bind(&profile.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                status = $2, skills = $3, company = $4, website = $5,
                                location = $6, bio = $7, github_username = $8, social = $9,
                                experience = $10, education = $11, updated_at = $12
                            WHERE
                                id = $1
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&profile.id.value)
                    .bind(&profile.status)
                    .bind(Json(&profile.skills))
                    .bind(&profile.company)
                    .bind(&profile.website)
                    .bind(&profile.location)
                    .bind(&profile.bio)
                    .bind(&profile.github_username)
                    .bind(Json(&profile.social))
                    .bind(Json(&profile.experience))
                    .bind(Json(&profile.education))
                    .bind(&profile.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
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
                    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
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
