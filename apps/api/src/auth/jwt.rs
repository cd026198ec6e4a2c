// Bearer token verification (HS256)
// The `sub` claim carries the acting user's profile id

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token could not be signed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("{0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),
}

/// Claims the API relies on
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Acting user's id
    pub sub: Uuid,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

impl Claims {
    /// Claims for `user_id` expiring `ttl` from now
    pub fn new(user_id: Uuid, ttl: Duration) -> Self {
        Self {
            sub: user_id,
            exp: (Utc::now() + ttl).timestamp().max(0) as usize,
        }
    }
}

/// Signs claims for a user
///
/// Production tokens come from the identity provider; this is used by
/// tests and local tooling that share the same secret.
///
/// # Example
/// ```
/// use chrono::Duration;
/// use opencourt_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "secret", Duration::hours(1)).unwrap();
///
/// assert_eq!(verify_token(&token, "secret").unwrap().sub, user_id);
/// ```
pub fn create_token(user_id: Uuid, secret: &str, ttl: Duration) -> Result<String, TokenError> {
    encode(
        &Header::default(),
        &Claims::new(user_id, ttl),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}

/// Verifies signature and expiry, returning the decoded claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenError::Rejected)
}
