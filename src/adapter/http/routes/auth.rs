use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::{LoginRequest, TokenResponse};
use crate::adapter::http::schema::user::CurrentUserResponse;
use crate::application::app_error::AppResult;
use crate::application::dto::auth::LoginDTO;
use crate::application::dto::id::IdDTO;
use crate::application::interactors::auth::LoginInteractor;
use crate::application::interactors::users::GetCurrentUserInteractor;

#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "Auth",
    request_body(
        content = LoginRequest,
        example = json!(
            {
                "email": "john@example.com",
                "password": "Password123!"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Login successful, bearer token issued",
            body = TokenResponse
        ),
        (
            status = 401,
            description = "Unknown email or wrong password",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Invalid Credentials"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn login(interactor: LoginInteractor, Json(payload): Json<LoginRequest>) -> AppResult<impl IntoResponse> {
    let dto = LoginDTO {
        email: payload.email.to_string(),
        password: payload.password,
    };
    let token = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(TokenResponse { token: token.token })))
}

#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "Auth",
    responses(
        (
            status = 200,
            description = "The authenticated user, without the password hash",
            body = CurrentUserResponse
        ),
        (
            status = 401,
            description = "Missing or invalid bearer token",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Invalid Credentials"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_current_user(
    auth_user: AuthUser,
    interactor: GetCurrentUserInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = IdDTO { id: auth_user.user_id };
    let user = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(CurrentUserResponse::from(user))))
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

    fn get_request_login(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/auth")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get_request_current_user(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/api/auth");
        if let Some(authorization) = authorization {
            builder = builder.header("authorization", authorization);
        }
        builder.body(Body::empty()).unwrap()
    }

    // Tests successful login with valid credentials
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_login_success(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let password = "Password123!";
        let hashed = hash_password(&state, password).await;
        let user_id = insert_user(&state.pool, &name, &email, &hashed).await;

        let body = serde_json::json!({ "email": email, "password": password });
        let response = app.oneshot(get_request_login(body)).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        delete_user(&state.pool, user_id).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    // Tests that login fails with incorrect password
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_login_invalid_password(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let hashed = hash_password(&state, "Password123!").await;
        let user_id = insert_user(&state.pool, &name, &email, &hashed).await;

        let body = serde_json::json!({ "email": email, "password": "WrongPassword1!" });
        let response = app.oneshot(get_request_login(body)).await.unwrap();
        let status = response.status();

        delete_user(&state.pool, user_id).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    // Tests that login fails for non-existent user accounts with the same
    // answer as a wrong password, to avoid user enumeration
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_login_nonexistent_user(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let body = serde_json::json!({ "email": "nobody_exists_xyz@auth.example", "password": "Password123!" });
        let response = app.oneshot(get_request_login(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Tests that the current-user route rejects requests without a token
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_current_user_missing_token(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let response = app.oneshot(get_request_current_user(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Tests that a garbage bearer token is rejected before any handler runs
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_current_user_invalid_token(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let response = app
            .oneshot(get_request_current_user(Some("Bearer not-a-jwt")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Tests that a valid token resolves to the stored user, minus the hash
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_current_user_success(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let hashed = hash_password(&state, "Password123!").await;
        let user_id = insert_user(&state.pool, &name, &email, &hashed).await;
        let authorization = bearer(&state, user_id);

        let response = app
            .oneshot(get_request_current_user(Some(&authorization)))
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        delete_user(&state.pool, user_id).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["email"], email);
        assert!(json.get("password").is_none());
    }
}
