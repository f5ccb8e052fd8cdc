use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::dto::profile::{EducationDTO, ExperienceDTO, ProfileDTO};
use crate::domain::entities::profile::SocialLinks;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    /// Comma-separated list, e.g. "Rust,SQL, Docker".
    #[validate(length(min = 1, message = "Skills is required"))]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    pub fn split_skills(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn social_links(&self) -> SocialLinks {
        SocialLinks {
            youtube: self.youtube.clone(),
            twitter: self.twitter.clone(),
            facebook: self.facebook.clone(),
            linkedin: self.linkedin.clone(),
            instagram: self.instagram.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddEducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub field_of_study: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialLinksResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    pub social: SocialLinksResponse,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ExperienceDTO> for ExperienceResponse {
    fn from(entry: ExperienceDTO) -> Self {
        Self {
            id: entry.id,
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

impl From<EducationDTO> for EducationResponse {
    fn from(entry: EducationDTO) -> Self {
        Self {
            id: entry.id,
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

impl From<SocialLinks> for SocialLinksResponse {
    fn from(social: SocialLinks) -> Self {
        Self {
            youtube: social.youtube,
            twitter: social.twitter,
            facebook: social.facebook,
            linkedin: social.linkedin,
            instagram: social.instagram,
        }
    }
}

impl From<ProfileDTO> for ProfileResponse {
    fn from(profile: ProfileDTO) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            name: profile.name,
            avatar: profile.avatar,
            status: profile.status,
            skills: profile.skills,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            github_username: profile.github_username,
            social: profile.social.into(),
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::UpsertProfileRequest;

    fn request_with_skills(skills: &str) -> UpsertProfileRequest {
        UpsertProfileRequest {
            status: "Developer".to_string(),
            skills: skills.to_string(),
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            youtube: None,
            twitter: None,
            facebook: None,
            linkedin: None,
            instagram: None,
        }
    }

    #[rstest]
    #[case("Rust,SQL,Docker", vec!["Rust", "SQL", "Docker"])]
    #[case(" Rust , SQL ", vec!["Rust", "SQL"])]
    #[case("Rust,,SQL,", vec!["Rust", "SQL"])]
    fn test_split_skills(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(request_with_skills(raw).split_skills(), expected);
    }
}
