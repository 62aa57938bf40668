//! Bearer-token verification.
//!
//! The platform's auth service issues the tokens; this module only verifies
//! them and extracts the caller identity. Token generation exists for tests
//! and local tooling.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// JWT claims carrying the verified caller identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user
    pub fn new(user_id: i32, email: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Generates a signed access token for a user.
pub fn generate_access_token(
    user_id: i32,
    email: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, email, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate access token: {}", e),
    })
}

/// Validates an access token and returns its claims.
///
/// Expired tokens are reported distinctly from malformed or badly signed
/// ones; both map to 401.
pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Unauthorized {
            message: "Token has expired".to_string(),
        },
        _ => AppError::Unauthorized {
            message: "Invalid or expired token".to_string(),
        },
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_characters_long";

    #[test]
    fn test_generate_and_validate() {
        let token = generate_access_token(42, "user@example.com".to_string(), SECRET, 1).unwrap();
        let claims = validate_access_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = generate_access_token(42, "user@example.com".to_string(), SECRET, 1).unwrap();
        let result = validate_access_token(&token, "another_secret_also_32_characters_long");
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let result = validate_access_token("not-a-token", SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
