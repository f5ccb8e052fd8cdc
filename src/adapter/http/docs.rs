use axum::{Json, response::Html};
use utoipa::{
    Modify, OpenApi,
    openapi::{
        OpenApi as OpenApiDoc,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};

use crate::adapter::http::{
    app_error_impl::{ErrorResponse, FieldError, ValidationErrorResponse},
    routes::{auth, post, profile, user},
    schema::{
        ValidPassword,
        auth::{LoginRequest, MessageResponse, TokenResponse},
        post::{AddCommentRequest, CommentResponse, CreatePostRequest, LikeResponse, PostResponse},
        profile::{
            AddEducationRequest, AddExperienceRequest, EducationResponse, ExperienceResponse, ProfileResponse,
            SocialLinksResponse, UpsertProfileRequest,
        },
        user::{CreateUserRequest, CurrentUserResponse},
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        user::register,
        auth::login,
        auth::get_current_user,
        profile::get_my_profile,
        profile::upsert_profile,
        profile::list_profiles,
        profile::get_profile_by_user,
        profile::delete_account,
        profile::add_experience,
        profile::remove_experience,
        profile::add_education,
        profile::remove_education,
        profile::get_github_repos,
        post::create_post,
        post::list_posts,
        post::get_post,
        post::delete_post,
        post::like_post,
        post::unlike_post,
        post::add_comment,
        post::remove_comment
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            ValidationErrorResponse,
            LoginRequest,
            TokenResponse,
            MessageResponse,
            CreateUserRequest,
            CurrentUserResponse,
            ValidPassword,
            UpsertProfileRequest,
            AddExperienceRequest,
            AddEducationRequest,
            ProfileResponse,
            SocialLinksResponse,
            ExperienceResponse,
            EducationResponse,
            CreatePostRequest,
            AddCommentRequest,
            PostResponse,
            LikeResponse,
            CommentResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
