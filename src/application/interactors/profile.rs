use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddEducationDTO, AddExperienceDTO, GithubReposDTO, ProfileDTO, RemoveProfileEntryDTO, UpsertProfileDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::post::PostWriter;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::application::interface::github::GithubClient;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile};
use crate::domain::entities::user::User;

/// Create-or-update keyed on the owning user, the only way profiles come
/// into existence.
#[derive(Clone)]
pub struct UpsertProfileInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpsertProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpsertProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let profile = match self.profile_reader.find_by_user(&user_id).await? {
            Some(mut existing) => {
                existing.profile.status = dto.status;
                existing.profile.skills = dto.skills;
                existing.profile.company = dto.company;
                existing.profile.website = dto.website;
                existing.profile.location = dto.location;
                existing.profile.bio = dto.bio;
                existing.profile.github_username = dto.github_username;
                existing.profile.social = dto.social;
                existing.profile.updated_at = Utc::now();
                self.profile_writer.update(existing.profile.clone()).await?;
                existing.profile
            }
            None => {
                let mut profile = Profile::new(user_id, dto.status, dto.skills);
                profile.company = dto.company;
                profile.website = dto.website;
                profile.location = dto.location;
                profile.bio = dto.bio;
                profile.github_username = dto.github_username;
                profile.social = dto.social;
                self.profile_writer.insert(profile.clone()).await?;
                profile
            }
        };
        self.db_session.commit().await?;
        info!("Profile for user {} upserted", user.id.value);
        Ok(ProfileDTO::from_profile(profile, user.name, user.avatar))
    }
}

#[derive(Clone)]
pub struct GetMyProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetMyProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let record = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(ProfileDTO::from_profile(record.profile, record.name, record.avatar))
    }
}

#[derive(Clone)]
pub struct ListProfilesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl ListProfilesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<ProfileDTO>> {
        let records = self.profile_reader.list_all().await?;
        Ok(records
            .into_iter()
            .map(|r| ProfileDTO::from_profile(r.profile, r.name, r.avatar))
            .collect())
    }
}

#[derive(Clone)]
pub struct GetProfileByUserInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileByUserInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        // A malformed id gets the same answer as an unknown user so the
        // route never leaks which of the two it was.
        let user_id: Id<User> = dto.id.try_into().map_err(|_| AppError::UserProfileNotFound)?;
        let record = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::UserProfileNotFound)?;
        Ok(ProfileDTO::from_profile(record.profile, record.name, record.avatar))
    }
}

/// Deletes the caller's posts, profile, and user record in that order, a
/// best-effort cascade inside one transaction.
#[derive(Clone)]
pub struct DeleteAccountInteractor {
    db_session: Arc<dyn DBSession>,
    post_writer: Arc<dyn PostWriter>,
    profile_writer: Arc<dyn ProfileWriter>,
    user_writer: Arc<dyn UserWriter>,
}

impl DeleteAccountInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_writer: Arc<dyn PostWriter>,
        profile_writer: Arc<dyn ProfileWriter>,
        user_writer: Arc<dyn UserWriter>,
    ) -> Self {
        Self {
            db_session,
            post_writer,
            profile_writer,
            user_writer,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.post_writer.delete_by_user(&user_id).await?;
        self.profile_writer.delete_by_user(&user_id).await?;
        self.user_writer.delete(&user_id).await?;
        self.db_session.commit().await?;
        info!("User {} deleted with profile and posts", user_id.value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct AddExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddExperienceDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut record = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        record.profile.add_experience(Experience {
            id: Uuid::now_v7(),
            title: dto.title,
            company: dto.company,
            location: dto.location,
            from_date: dto.from_date,
            to_date: dto.to_date,
            current: dto.current,
            description: dto.description,
        });
        self.profile_writer.update(record.profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(ProfileDTO::from_profile(record.profile, record.name, record.avatar))
    }
}

#[derive(Clone)]
pub struct RemoveExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveProfileEntryDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let entry_id =
            Uuid::try_parse(&dto.entry_id).map_err(|e| AppError::InvalidId(format!("Invalid UUID: {}", e)))?;
        let mut record = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        record.profile.remove_experience(entry_id);
        self.profile_writer.update(record.profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(ProfileDTO::from_profile(record.profile, record.name, record.avatar))
    }
}

#[derive(Clone)]
pub struct AddEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddEducationDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut record = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        record.profile.add_education(Education {
            id: Uuid::now_v7(),
            school: dto.school,
            degree: dto.degree,
            field_of_study: dto.field_of_study,
            from_date: dto.from_date,
            to_date: dto.to_date,
            current: dto.current,
            description: dto.description,
        });
        self.profile_writer.update(record.profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(ProfileDTO::from_profile(record.profile, record.name, record.avatar))
    }
}

#[derive(Clone)]
pub struct RemoveEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveProfileEntryDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let entry_id =
            Uuid::try_parse(&dto.entry_id).map_err(|e| AppError::InvalidId(format!("Invalid UUID: {}", e)))?;
        let mut record = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        record.profile.remove_education(entry_id);
        self.profile_writer.update(record.profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(ProfileDTO::from_profile(record.profile, record.name, record.avatar))
    }
}

#[derive(Clone)]
pub struct GetGithubReposInteractor {
    github: Arc<dyn GithubClient>,
}

impl GetGithubReposInteractor {
    pub fn new(github: Arc<dyn GithubClient>) -> Self {
        Self { github }
    }

    pub async fn execute(&self, dto: GithubReposDTO) -> AppResult<serde_json::Value> {
        self.github.recent_repos(&dto.username).await
    }
}
