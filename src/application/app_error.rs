use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("User not authorized")]
    NotAuthorized,

    #[error("User already exists")]
    EmailTaken,

    #[error("There is no profile for this user")]
    ProfileNotFound,

    #[error("No profile found for this user")]
    UserProfileNotFound,

    #[error("No such post was found")]
    PostNotFound,

    #[error("Comment does not exist")]
    CommentNotFound,

    #[error("Post has not been liked")]
    PostNotLiked,

    #[error("No Github profile found with this username")]
    GithubUserNotFound,

    #[error("Validation error")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid request body")]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),

    #[error("Password hashing failed")]
    PasswordHashError,

    #[error("Token error")]
    TokenError,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;
