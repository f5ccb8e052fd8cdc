use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::crypto::TokenIssuer;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::infra::config::JwtConfig;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// HS256 bearer tokens carrying the user id in `sub`. Stateless: logout
/// is simply the client dropping the token.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl JwtTokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_seconds: config.ttl_seconds,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(&self, user_id: &Id<User>) -> AppResult<String> {
        let claims = Claims {
            sub: user_id.value.to_string(),
            exp: (Utc::now() + Duration::seconds(self.ttl_seconds)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            warn!("Failed to sign token: {}", e);
            AppError::TokenError
        })
    }

    fn verify(&self, token: &str) -> AppResult<Id<User>> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map_err(|_| AppError::InvalidCredentials)?;
        data.claims.sub.try_into().map_err(|_| AppError::InvalidCredentials)
    }
}
