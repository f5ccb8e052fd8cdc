#![cfg(test)]

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::infra::state::AppState;

pub fn db_available() -> bool {
    std::env::var("TEST_DATABASE_URL").is_ok()
}

pub fn unique_credentials() -> (String, String) {
    let id = Uuid::now_v7().as_simple().to_string();
    let name = format!("t_{}", &id[..16]);
    let email = format!("{}@test.example", &id[..16]);

    (name, email)
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Option<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .expect("find user by email")
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn hash_password(state: &AppState, password: &str) -> String {
    state.hasher.hash_password(password).await.expect("hash password")
}

pub async fn insert_user(pool: &PgPool, name: &str, email: &str, hashed_password: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (id, name, email, password, avatar) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .bind(User::gravatar_url(email))
    .fetch_one(pool)
    .await
    .expect("insert user")
}

pub fn bearer(state: &AppState, user_id: Uuid) -> String {
    let token = state.tokens.sign(&Id::<User>::new(user_id)).expect("sign token");
    format!("Bearer {}", token)
}
