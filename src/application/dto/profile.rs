use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::profile::{Education, Experience, Profile, SocialLinks};

#[derive(Debug, Clone)]
pub struct UpsertProfileDTO {
    pub user_id: String,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
}

#[derive(Debug, Clone)]
pub struct AddExperienceDTO {
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoveProfileEntryDTO {
    pub user_id: String,
    pub entry_id: String,
}

#[derive(Debug, Clone)]
pub struct AddEducationDTO {
    pub user_id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GithubReposDTO {
    pub username: String,
}

/// Profile as returned to clients, with the owner's name and avatar
/// joined in from the users table.
#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceDTO>,
    pub education: Vec<EducationDTO>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ExperienceDTO {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EducationDTO {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Experience> for ExperienceDTO {
    fn from(entry: Experience) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title,
            company: entry.company,
            location: entry.location,
            from_date: entry.from_date,
            to_date: entry.to_date,
            current: entry.current,
            description: entry.description,
        }
    }
}

impl From<Education> for EducationDTO {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id.to_string(),
            school: entry.school,
            degree: entry.degree,
            field_of_study: entry.field_of_study,
            from_date: entry.from_date,
            to_date: entry.to_date,
            current: entry.current,
            description: entry.description,
        }
    }
}

impl ProfileDTO {
    pub fn from_profile(profile: Profile, name: String, avatar: String) -> Self {
        Self {
            id: profile.id.value.to_string(),
            user_id: profile.user_id.value.to_string(),
            name,
            avatar,
            status: profile.status,
            skills: profile.skills,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            github_username: profile.github_username,
            social: profile.social,
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
