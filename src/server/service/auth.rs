//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. Logging users in is handled
//! elsewhere; this service only needs to agree with the issuer on the secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::auth::Claims,
};

/// Signs and verifies JWTs with a shared secret.
///
/// Cheap to clone; the keys are plain byte buffers.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Creates a new JwtService from the shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for a user, valid for `ttl`.
    ///
    /// # Returns
    /// - `Ok(String)` - The encoded token
    /// - `Err(AppError::InternalErr(TokenSigning))` - Signing failed
    pub fn issue(&self, user_id: i32, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|source| InternalError::TokenSigning { user_id, source })?;

        Ok(token)
    }

    /// Verifies signature and expiry of a token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;

        Ok(data.claims)
    }
}
