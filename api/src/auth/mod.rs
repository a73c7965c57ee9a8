pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use util::config;

use crate::response::ApiError;

/// Generates a JWT and its expiry timestamp (RFC 3339) for a given user.
pub fn generate_jwt(user_id: i64, admin: bool) -> Result<(String, String), ApiError> {
    let expiry = i64::try_from(config::jwt_duration_minutes())
        .ok()
        .and_then(TimeDelta::try_minutes)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .ok_or_else(|| {
            tracing::error!(
                minutes = config::jwt_duration_minutes(),
                "JWT duration out of range"
            );
            ApiError::Internal("Failed to generate token".into())
        })?;
    let exp = usize::try_from(expiry.timestamp())
        .map_err(|_| ApiError::Internal("Failed to generate token".into()))?;

    let claims = Claims {
        sub: user_id,
        admin,
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Token encoding failed");
        ApiError::Internal("Failed to generate token".into())
    })?;

    Ok((token, expiry.to_rfc3339()))
}
