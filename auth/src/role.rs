use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Platform role carried in token claims.
///
/// Designer and Supplier accounts self-register; Admin accounts are
/// provisioned out of band and exist only as a token-level role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Designer,
    Supplier,
    Admin,
}

impl Role {
    /// Role name as stored in token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Designer => "Designer",
            Role::Supplier => "Supplier",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleParseError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "designer" => Ok(Role::Designer),
            "supplier" => Ok(Role::Supplier),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleParseError::Unknown(s.to_string())),
        }
    }
}
