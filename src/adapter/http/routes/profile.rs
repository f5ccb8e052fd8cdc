use axum::extract::Path;
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::adapter::http::app_error_impl::{ErrorResponse, ValidationErrorResponse};
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::MessageResponse;
use crate::adapter::http::schema::profile::{
    AddEducationRequest, AddExperienceRequest, ProfileResponse, UpsertProfileRequest,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddEducationDTO, AddExperienceDTO, GithubReposDTO, RemoveProfileEntryDTO, UpsertProfileDTO,
};
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, DeleteAccountInteractor, GetGithubReposInteractor,
    GetMyProfileInteractor, GetProfileByUserInteractor, ListProfilesInteractor, RemoveEducationInteractor,
    RemoveExperienceInteractor, UpsertProfileInteractor,
};

#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "Profile",
    responses(
        (status = 200, description = "The caller's profile", body = ProfileResponse),
        (
            status = 400,
            description = "No profile exists yet",
            body = ErrorResponse,
            example = json!({ "error": "There is no profile for this user" })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_my_profile(
    auth_user: AuthUser,
    interactor: GetMyProfileInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: auth_user.user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "Profile",
    request_body(
        content = UpsertProfileRequest,
        example = json!(
            {
                "status": "Senior Developer",
                "skills": "Rust, SQL, Docker",
                "company": "Acme",
                "github_username": "johndoe"
            }
        )
    ),
    responses(
        (status = 200, description = "Created or updated profile", body = ProfileResponse),
        (status = 400, description = "Validation failure", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn upsert_profile(
    auth_user: AuthUser,
    interactor: UpsertProfileInteractor,
    ValidJson(payload): ValidJson<UpsertProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertProfileDTO {
        user_id: auth_user.user_id,
        status: payload.status.clone(),
        skills: payload.split_skills(),
        company: payload.company.clone(),
        website: payload.website.clone(),
        location: payload.location.clone(),
        bio: payload.bio.clone(),
        github_username: payload.github_username.clone(),
        social: payload.social_links(),
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "All profiles with owner name and avatar", body = Vec<ProfileResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_profiles(interactor: ListProfilesInteractor) -> AppResult<impl IntoResponse> {
    let profiles = interactor.execute().await?;
    let response: Vec<ProfileResponse> = profiles.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    tag = "Profile",
    params(("user_id" = String, Path, description = "Profile owner's user id")),
    responses(
        (status = 200, description = "The user's profile", body = ProfileResponse),
        (
            status = 400,
            description = "Malformed id or no profile for that user",
            body = ErrorResponse,
            example = json!({ "error": "No profile found for this user" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_profile_by_user(
    interactor: GetProfileByUserInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (
            status = 200,
            description = "User, profile, and posts removed",
            body = MessageResponse,
            example = json!({ "message": "User deleted" })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_account(
    auth_user: AuthUser,
    interactor: DeleteAccountInteractor,
) -> AppResult<impl IntoResponse> {
    interactor.execute(IdDTO { id: auth_user.user_id }).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "User deleted".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "Profile",
    request_body(
        content = AddExperienceRequest,
        example = json!(
            {
                "title": "Backend Engineer",
                "company": "Acme",
                "from_date": "2021-03-01",
                "current": true
            }
        )
    ),
    responses(
        (status = 200, description = "Profile with the new entry prepended", body = ProfileResponse),
        (status = 400, description = "Validation failure or missing profile", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn add_experience(
    auth_user: AuthUser,
    interactor: AddExperienceInteractor,
    ValidJson(payload): ValidJson<AddExperienceRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddExperienceDTO {
        user_id: auth_user.user_id,
        title: payload.title,
        company: payload.company,
        location: payload.location,
        from_date: payload.from_date,
        to_date: payload.to_date,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    tag = "Profile",
    params(("exp_id" = String, Path, description = "Experience entry id")),
    responses(
        (status = 200, description = "Profile without the entry", body = ProfileResponse),
        (status = 400, description = "Malformed entry id or missing profile", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn remove_experience(
    auth_user: AuthUser,
    interactor: RemoveExperienceInteractor,
    Path(exp_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveProfileEntryDTO {
        user_id: auth_user.user_id,
        entry_id: exp_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    put,
    path = "/api/profile/education",
    tag = "Profile",
    request_body(
        content = AddEducationRequest,
        example = json!(
            {
                "school": "State University",
                "degree": "BSc",
                "field_of_study": "Computer Science",
                "from_date": "2015-09-01",
                "to_date": "2019-06-30"
            }
        )
    ),
    responses(
        (status = 200, description = "Profile with the new entry prepended", body = ProfileResponse),
        (status = 400, description = "Validation failure or missing profile", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn add_education(
    auth_user: AuthUser,
    interactor: AddEducationInteractor,
    ValidJson(payload): ValidJson<AddEducationRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddEducationDTO {
        user_id: auth_user.user_id,
        school: payload.school,
        degree: payload.degree,
        field_of_study: payload.field_of_study,
        from_date: payload.from_date,
        to_date: payload.to_date,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    tag = "Profile",
    params(("edu_id" = String, Path, description = "Education entry id")),
    responses(
        (status = 200, description = "Profile without the entry", body = ProfileResponse),
        (status = 400, description = "Malformed entry id or missing profile", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn remove_education(
    auth_user: AuthUser,
    interactor: RemoveEducationInteractor,
    Path(edu_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveProfileEntryDTO {
        user_id: auth_user.user_id,
        entry_id: edu_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/api/profile/github/{username}",
    tag = "Profile",
    params(("username" = String, Path, description = "GitHub login")),
    responses(
        (status = 200, description = "The user's five most recent public repos"),
        (
            status = 404,
            description = "Unknown GitHub user",
            body = ErrorResponse,
            example = json!({ "error": "No Github profile found with this username" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_github_repos(
    interactor: GetGithubReposInteractor,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let repos = interactor.execute(GithubReposDTO { username }).await?;
    Ok((StatusCode::OK, Json(repos)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::Value;
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::infra::app::create_app;
    use crate::infra::state::AppState;
    use crate::tests::fixtures::init_test_app_state;
    use crate::tests::helpers::{bearer, db_available, delete_user, hash_password, insert_user, unique_credentials};

    fn post_profile(authorization: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/profile")
            .header("content-type", "application/json")
            .header("authorization", authorization)
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get_my_profile(authorization: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/api/profile/me")
            .header("authorization", authorization)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // Tests that profile creation without status and skills is rejected
    // with field-level validation errors, before any database work
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_upsert_profile_missing_required_fields(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let authorization = bearer(&state, uuid::Uuid::now_v7());
        let body = serde_json::json!({ "status": "", "skills": "" });

        let response = app.oneshot(post_profile(&authorization, body)).await.unwrap();
        let status = response.status();
        let json = json_body(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = json["errors"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["field"].as_str())
            .collect();
        assert!(fields.contains(&"status"));
        assert!(fields.contains(&"skills"));
    }

    // Tests that the public lookup answers a malformed id the same way as
    // an unknown user, with its own wording
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_get_profile_by_user_malformed_id(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let request = Request::builder()
            .method("GET")
            .uri("/api/profile/user/not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let json = json_body(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "No profile found for this user");
    }

    // Tests that the profile list is public
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_list_profiles_public(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let request = Request::builder()
            .method("GET")
            .uri("/api/profile")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    // Tests the main profile lifecycle end to end:
    // - /me before creation is a 400 with the canonical message
    // - upsert creates, then updates in place (same profile id)
    // - skills arrive as a comma-separated string and come back as a list
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_profile_upsert_lifecycle(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let hashed = hash_password(&state, "Password123!").await;
        let user_id = insert_user(&state.pool, &name, &email, &hashed).await;
        let authorization = bearer(&state, user_id);

        let response = app.clone().oneshot(get_my_profile(&authorization)).await.unwrap();
        let status = response.status();
        let json = json_body(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "There is no profile for this user");

        let request = Request::builder()
            .method("GET")
            .uri(format!("/api/profile/user/{}", user_id))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let json = json_body(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "No profile found for this user");

        let body = serde_json::json!({ "status": "Developer", "skills": "Rust, SQL" });
        let response = app.clone().oneshot(post_profile(&authorization, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = json_body(response).await;
        assert_eq!(created["skills"], serde_json::json!(["Rust", "SQL"]));
        assert_eq!(created["name"], name);

        let body = serde_json::json!({ "status": "Lead", "skills": "Rust" });
        let response = app.clone().oneshot(post_profile(&authorization, body)).await.unwrap();
        let updated = json_body(response).await;
        assert_eq!(updated["status"], "Lead");
        assert_eq!(updated["id"], created["id"]);

        delete_user(&state.pool, user_id).await;
    }

    // Tests that experience entries are prepended and removable by id
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_experience_prepend_and_remove(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let hashed = hash_password(&state, "Password123!").await;
        let user_id = insert_user(&state.pool, &name, &email, &hashed).await;
        let authorization = bearer(&state, user_id);

        let body = serde_json::json!({ "status": "Developer", "skills": "Rust" });
        let response = app.clone().oneshot(post_profile(&authorization, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let add_experience = |title: &str| {
            Request::builder()
                .method("PUT")
                .uri("/api/profile/experience")
                .header("content-type", "application/json")
                .header("authorization", authorization.as_str())
                .body(Body::from(
                    serde_json::to_vec(&serde_json::json!({
                        "title": title,
                        "company": "Acme",
                        "from_date": "2021-03-01",
                        "current": true
                    }))
                    .unwrap(),
                ))
                .unwrap()
        };

        let response = app.clone().oneshot(add_experience("First")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let response = app.clone().oneshot(add_experience("Second")).await.unwrap();
        let json = json_body(response).await;
        let experience = json["experience"].as_array().unwrap();
        assert_eq!(experience.len(), 2);
        assert_eq!(experience[0]["title"], "Second");

        let entry_id = experience[1]["id"].as_str().unwrap().to_string();
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/api/profile/experience/{}", entry_id))
            .header("authorization", authorization.as_str())
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let json = json_body(response).await;
        let experience = json["experience"].as_array().unwrap();
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0]["title"], "Second");

        delete_user(&state.pool, user_id).await;
    }

    // Tests that deleting the account removes the user row and with it,
    // via cascade, the profile
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_delete_account(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let hashed = hash_password(&state, "Password123!").await;
        let user_id = insert_user(&state.pool, &name, &email, &hashed).await;
        let authorization = bearer(&state, user_id);

        let body = serde_json::json!({ "status": "Developer", "skills": "Rust" });
        let response = app.clone().oneshot(post_profile(&authorization, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/profile")
            .header("authorization", authorization.as_str())
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let json = json_body(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "User deleted");

        let remaining = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
