use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::domain::entities::id::Id;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Id<User>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password: String, avatar: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            email,
            password,
            avatar,
            created_at: Utc::now(),
        }
    }

    /// Gravatar URL for the email, normalized per the gravatar spec
    /// (trimmed, lowercased, SHA-256). Falls back to the "mystery person"
    /// image for addresses without a gravatar account.
    pub fn gravatar_url(email: &str) -> String {
        let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
        format!("https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravatar_url_normalizes_email() {
        let a = User::gravatar_url("John@Example.com ");
        let b = User::gravatar_url("john@example.com");
        assert_eq!(a, b);
        assert!(a.starts_with("https://www.gravatar.com/avatar/"));
    }

    #[test]
    fn test_gravatar_url_differs_per_email() {
        assert_ne!(User::gravatar_url("a@example.com"), User::gravatar_url("b@example.com"));
    }
}
