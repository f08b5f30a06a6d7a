use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::role::Role;

/// Session token claims.
///
/// The full identity a token carries: subject (user id), email, platform
/// role, and the issued-at/expiry timestamps. Tokens are stateless; this is
/// everything a service learns about the caller without a database lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Account email address
    pub email: String,

    /// Platform role
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user session expiring after `ttl_hours`.
    pub fn for_user(
        user_id: impl ToString,
        email: impl Into<String>,
        role: Role,
        ttl_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    ///
    /// A token is invalid from the moment the clock reaches `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
