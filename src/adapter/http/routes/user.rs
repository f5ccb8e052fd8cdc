use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::adapter::http::app_error_impl::{ErrorResponse, ValidationErrorResponse};
use crate::adapter::http::schema::auth::TokenResponse;
use crate::adapter::http::schema::user::CreateUserRequest;
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::user::CreateUserDTO;
use crate::application::interactors::users::RegisterUserInteractor;

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body(
        content = CreateUserRequest,
        example = json!(
            {
                "name": "John Doe",
                "email": "john@example.com",
                "password": "Password123!"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "User registered, bearer token issued",
            body = TokenResponse
        ),
        (
            status = 400,
            description = "Validation failure or duplicate email",
            body = ValidationErrorResponse,
            example = json!(
                {
                    "error": "User already exists"
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
pub async fn register(
    interactor: RegisterUserInteractor,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        name: payload.name,
        email: payload.email.to_string(),
        password: payload.password.value().to_string(),
    };
    let token = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(TokenResponse { token: token.token })))
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
    use crate::tests::helpers::{db_available, delete_user, find_user_by_email, unique_credentials};

    fn get_request_register(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    // Tests that registration rejects a weak password before touching the
    // database, with a field-level error list
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_register_weak_password(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let body = serde_json::json!({
            "name": "John Doe",
            "email": "john@example.com",
            "password": "short"
        });

        let response = app.oneshot(get_request_register(body)).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["errors"].is_array());
    }

    // Tests that a malformed email fails JSON deserialization with a 400
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_register_invalid_email(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let body = serde_json::json!({
            "name": "John Doe",
            "email": "not-an-email",
            "password": "Password123!"
        });

        let response = app.oneshot(get_request_register(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Tests successful registration
    // Verifies:
    // - Endpoint returns 200 OK with a non-empty bearer token
    // - The user row exists afterwards
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_register_success(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let body = serde_json::json!({ "name": name, "email": email, "password": "Password123!" });

        let response = app.oneshot(get_request_register(body)).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let user_id = find_user_by_email(&state.pool, &email).await;
        if let Some(user_id) = user_id {
            delete_user(&state.pool, user_id).await;
        }

        assert_eq!(status, StatusCode::OK);
        assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(user_id.is_some(), "registered user must be persisted");
    }

    // Tests that registering the same email twice is rejected with
    // "User already exists"
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_register_duplicate_email(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (name, email) = unique_credentials();
        let body = serde_json::json!({ "name": name, "email": email, "password": "Password123!" });

        let first = app.clone().oneshot(get_request_register(body.clone())).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app.oneshot(get_request_register(body)).await.unwrap();
        let status = second.status();
        let bytes = second.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        if let Some(user_id) = find_user_by_email(&state.pool, &email).await {
            delete_user(&state.pool, user_id).await;
        }

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "User already exists");
    }
}
