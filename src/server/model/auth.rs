//! Token claims carried by authenticated requests.

use serde::{Deserialize, Serialize};

/// JWT claims identifying a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the authenticated user
    pub sub: i32,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}
