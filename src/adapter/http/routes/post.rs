use axum::extract::Path;
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::adapter::http::app_error_impl::{ErrorResponse, ValidationErrorResponse};
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::MessageResponse;
use crate::adapter::http::schema::post::{AddCommentRequest, CommentResponse, CreatePostRequest, LikeResponse, PostResponse};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::post::{AddCommentDTO, CreatePostDTO, PostActionDTO, RemoveCommentDTO};
use crate::application::interactors::post::{
    AddCommentInteractor, CreatePostInteractor, DeletePostInteractor, GetPostInteractor, LikePostInteractor,
    ListPostsInteractor, RemoveCommentInteractor, UnlikePostInteractor,
};

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    request_body(
        content = CreatePostRequest,
        example = json!({ "text": "Shipped a new release today" })
    ),
    responses(
        (status = 200, description = "The created post", body = PostResponse),
        (status = 400, description = "Validation failure", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_post(
    auth_user: AuthUser,
    interactor: CreatePostInteractor,
    ValidJson(payload): ValidJson<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreatePostDTO {
        user_id: auth_user.user_id,
        text: payload.text,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(post))))
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<PostResponse>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_posts(_auth_user: AuthUser, interactor: ListPostsInteractor) -> AppResult<impl IntoResponse> {
    let posts = interactor.execute().await?;
    let response: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (
            status = 404,
            description = "Malformed or unknown post id",
            body = ErrorResponse,
            example = json!({ "error": "No such post was found" })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_post(
    _auth_user: AuthUser,
    interactor: GetPostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = interactor.execute(IdDTO { id: post_id }).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(post))))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (
            status = 200,
            description = "Post removed",
            body = MessageResponse,
            example = json!({ "message": "Post removed" })
        ),
        (status = 401, description = "Caller does not own the post", body = ErrorResponse),
        (status = 404, description = "Malformed or unknown post id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_post(
    auth_user: AuthUser,
    interactor: DeletePostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: auth_user.user_id,
        post_id,
    };
    interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Post removed".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/posts/like/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post's like list; liking twice is a no-op", body = Vec<LikeResponse>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Malformed or unknown post id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn like_post(
    auth_user: AuthUser,
    interactor: LikePostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: auth_user.user_id,
        post_id,
    };
    let likes = interactor.execute(dto).await?;
    let response: Vec<LikeResponse> = likes.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/posts/unlike/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post's like list", body = Vec<LikeResponse>),
        (
            status = 400,
            description = "Caller never liked this post",
            body = ErrorResponse,
            example = json!({ "error": "Post has not been liked" })
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Malformed or unknown post id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn unlike_post(
    auth_user: AuthUser,
    interactor: UnlikePostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: auth_user.user_id,
        post_id,
    };
    let likes = interactor.execute(dto).await?;
    let response: Vec<LikeResponse> = likes.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/posts/comment/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    request_body(
        content = AddCommentRequest,
        example = json!({ "text": "Nice work!" })
    ),
    responses(
        (status = 200, description = "The post's comments, newest first", body = Vec<CommentResponse>),
        (status = 400, description = "Validation failure", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Malformed or unknown post id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn add_comment(
    auth_user: AuthUser,
    interactor: AddCommentInteractor,
    Path(post_id): Path<String>,
    ValidJson(payload): ValidJson<AddCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddCommentDTO {
        user_id: auth_user.user_id,
        post_id,
        text: payload.text,
    };
    let comments = interactor.execute(dto).await?;
    let response: Vec<CommentResponse> = comments.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/posts/comment/{post_id}/{comment_id}",
    tag = "Posts",
    params(
        ("post_id" = String, Path, description = "Post id"),
        ("comment_id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "The post's remaining comments", body = Vec<CommentResponse>),
        (status = 401, description = "Caller does not own the comment", body = ErrorResponse),
        (
            status = 404,
            description = "Unknown post or comment",
            body = ErrorResponse,
            example = json!({ "error": "Comment does not exist" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn remove_comment(
    auth_user: AuthUser,
    interactor: RemoveCommentInteractor,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveCommentDTO {
        user_id: auth_user.user_id,
        post_id,
        comment_id,
    };
    let comments = interactor.execute(dto).await?;
    let response: Vec<CommentResponse> = comments.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serial_test::serial;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::infra::app::create_app;
    use crate::infra::state::AppState;
    use crate::tests::fixtures::init_test_app_state;
    use crate::tests::helpers::{bearer, db_available, delete_user, hash_password, insert_user, unique_credentials};

    fn post_request(uri: &str, authorization: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", authorization)
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn bare_request(method: &str, uri: &str, authorization: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("authorization", authorization)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn setup_user(state: &AppState) -> (Uuid, String) {
        let (name, email) = unique_credentials();
        let hashed = hash_password(state, "Password123!").await;
        let user_id = insert_user(&state.pool, &name, &email, &hashed).await;
        let authorization = bearer(state, user_id);
        (user_id, authorization)
    }

    // Tests that an empty post body is rejected before any database work
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_create_post_empty_text(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let authorization = bearer(&state, Uuid::now_v7());
        let body = serde_json::json!({ "text": "" });

        let response = app
            .oneshot(post_request("/api/posts", &authorization, body))
            .await
            .unwrap();
        let status = response.status();
        let json = json_body(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["message"], "Text is required");
    }

    // Tests that the posts feed requires authentication
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_list_posts_requires_auth(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let request = Request::builder()
            .method("GET")
            .uri("/api/posts")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Tests the like/unlike cycle:
    // - first like adds an entry, second like is a no-op with the same set
    // - unlike removes it, a second unlike is a 400
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_like_unlike_cycle(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (user_id, authorization) = setup_user(&state).await;

        let body = serde_json::json!({ "text": "like me" });
        let response = app
            .clone()
            .oneshot(post_request("/api/posts", &authorization, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let post = json_body(response).await;
        let post_id = post["id"].as_str().unwrap().to_string();

        let like_uri = format!("/api/posts/like/{}", post_id);
        let response = app
            .clone()
            .oneshot(bare_request("PUT", &like_uri, &authorization))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let likes = json_body(response).await;
        assert_eq!(likes.as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(bare_request("PUT", &like_uri, &authorization))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let likes = json_body(response).await;
        assert_eq!(likes.as_array().unwrap().len(), 1, "double like must be a no-op");

        let unlike_uri = format!("/api/posts/unlike/{}", post_id);
        let response = app
            .clone()
            .oneshot(bare_request("PUT", &unlike_uri, &authorization))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let likes = json_body(response).await;
        assert!(likes.as_array().unwrap().is_empty());

        let response = app
            .clone()
            .oneshot(bare_request("PUT", &unlike_uri, &authorization))
            .await
            .unwrap();
        let status = response.status();
        let json = json_body(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Post has not been liked");

        delete_user(&state.pool, user_id).await;
    }

    // Tests commenting and comment removal, including the authorization
    // check on someone else's comment
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_comment_lifecycle(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (author_id, author_auth) = setup_user(&state).await;
        let (commenter_id, commenter_auth) = setup_user(&state).await;

        let body = serde_json::json!({ "text": "comment on me" });
        let response = app
            .clone()
            .oneshot(post_request("/api/posts", &author_auth, body))
            .await
            .unwrap();
        let post = json_body(response).await;
        let post_id = post["id"].as_str().unwrap().to_string();

        let comment_uri = format!("/api/posts/comment/{}", post_id);
        let body = serde_json::json!({ "text": "first!" });
        let response = app
            .clone()
            .oneshot(post_request(&comment_uri, &commenter_auth, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let comments = json_body(response).await;
        let comment_id = comments[0]["id"].as_str().unwrap().to_string();

        // The post author is not the comment author, so removal is refused
        let remove_uri = format!("/api/posts/comment/{}/{}", post_id, comment_id);
        let response = app
            .clone()
            .oneshot(bare_request("DELETE", &remove_uri, &author_auth))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(bare_request("DELETE", &remove_uri, &commenter_auth))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let comments = json_body(response).await;
        assert!(comments.as_array().unwrap().is_empty());

        // Removing it again reports a missing comment
        let response = app
            .clone()
            .oneshot(bare_request("DELETE", &remove_uri, &commenter_auth))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        delete_user(&state.pool, commenter_id).await;
        delete_user(&state.pool, author_id).await;
    }

    // Tests post deletion: the owner check and the cascade when the user
    // account goes away
    #[rstest]
    #[tokio::test]
    #[serial]
    async fn test_delete_post_ownership(#[future] init_test_app_state: anyhow::Result<AppState>) {
        if !db_available() {
            return;
        }
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let (owner_id, owner_auth) = setup_user(&state).await;
        let (other_id, other_auth) = setup_user(&state).await;

        let body = serde_json::json!({ "text": "mine" });
        let response = app
            .clone()
            .oneshot(post_request("/api/posts", &owner_auth, body))
            .await
            .unwrap();
        let post = json_body(response).await;
        let post_id = post["id"].as_str().unwrap().to_string();

        let delete_uri = format!("/api/posts/{}", post_id);
        let response = app
            .clone()
            .oneshot(bare_request("DELETE", &delete_uri, &other_auth))
            .await
            .unwrap();
        let status = response.status();
        let json = json_body(response).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "User not authorized");

        let response = app
            .clone()
            .oneshot(bare_request("DELETE", &delete_uri, &owner_auth))
            .await
            .unwrap();
        let status = response.status();
        let json = json_body(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Post removed");

        // The post is gone for everyone
        let response = app
            .clone()
            .oneshot(bare_request("GET", &format!("/api/posts/{}", post_id), &owner_auth))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        delete_user(&state.pool, other_id).await;
        delete_user(&state.pool, owner_id).await;
    }
}
