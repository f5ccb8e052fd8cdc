use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// Career metadata for one user. The experience and education lists are
/// embedded in the profile row and mutated in memory, then written back
/// whole, so a profile update is always a single-row operation.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Profile {
    pub fn new(user_id: Id<User>, status: String, skills: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            user_id,
            status,
            skills,
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Newest entries come first, matching the feed-style ordering the
    /// clients render.
    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
        self.updated_at = Utc::now();
    }

    /// Removes the entry with the given id. An unknown id leaves the list
    /// unchanged.
    pub fn remove_experience(&mut self, experience_id: Uuid) {
        self.experience.retain(|e| e.id != experience_id);
        self.updated_at = Utc::now();
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
        self.updated_at = Utc::now();
    }

    pub fn remove_education(&mut self, education_id: Uuid) {
        self.education.retain(|e| e.id != education_id);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_profile() -> Profile {
        Profile::new(
            Id::generate(),
            "Developer".to_string(),
            vec!["Rust".to_string(), "SQL".to_string()],
        )
    }

    fn build_experience(title: &str) -> Experience {
        Experience {
            id: Uuid::now_v7(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to_date: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn test_add_experience_prepends() {
        let mut profile = build_profile();
        profile.add_experience(build_experience("first"));
        profile.add_experience(build_experience("second"));

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "second");
        assert_eq!(profile.experience[1].title, "first");
    }

    #[test]
    fn test_remove_experience_by_id() {
        let mut profile = build_profile();
        let keep = build_experience("keep");
        let drop = build_experience("drop");
        let drop_id = drop.id;
        profile.add_experience(keep);
        profile.add_experience(drop);

        profile.remove_experience(drop_id);

        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "keep");
    }

    #[test]
    fn test_remove_experience_unknown_id_is_noop() {
        let mut profile = build_profile();
        profile.add_experience(build_experience("only"));

        profile.remove_experience(Uuid::now_v7());

        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_remove_education_by_id() {
        let mut profile = build_profile();
        let education = Education {
            id: Uuid::now_v7(),
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            from_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2019, 6, 1),
            current: false,
            description: None,
        };
        let education_id = education.id;
        profile.add_education(education);

        profile.remove_education(education_id);

        assert!(profile.education.is_empty());
    }
}
