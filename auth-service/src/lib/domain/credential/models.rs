use std::fmt;
use std::str::FromStr;

use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::credential::errors::CredentialIdError;
use crate::domain::credential::errors::EmailError;

/// Credential aggregate entity.
///
/// The stored identity record: who the user is and how they prove it.
/// `password_hash` is an opaque PHC record, never the plaintext; it must not
/// be logged or serialized to any caller.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: CredentialId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Credential unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialId(pub Uuid);

impl CredentialId {
    /// Generate a new random credential ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a credential ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CredentialIdError> {
        Uuid::parse_str(s)
            .map(CredentialId)
            .map_err(|e| CredentialIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CredentialId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// Validates email format using RFC 5322 compliant parser. Uniqueness is a
/// case-sensitive exact match, enforced by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact fields captured with a registration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDetails {
    pub company_name: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
}

/// Role-specific profile record created alongside a credential.
///
/// Only designers and suppliers self-register; the variant decides which
/// profile table receives the second insert. Admin is unrepresentable here
/// on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRecord {
    Designer(ProfileDetails),
    Supplier(ProfileDetails),
}

impl ProfileRecord {
    /// Platform role implied by the profile variant.
    pub fn role(&self) -> Role {
        match self {
            ProfileRecord::Designer(_) => Role::Designer,
            ProfileRecord::Supplier(_) => Role::Supplier,
        }
    }

    pub fn details(&self) -> &ProfileDetails {
        match self {
            ProfileRecord::Designer(details) | ProfileRecord::Supplier(details) => details,
        }
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: ProfileRecord,
}

/// Command to authenticate an existing account
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

/// Outcome of a successful register or login.
///
/// Returned to the caller and never persisted; the token inside is the only
/// session state that exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub token: String,
    pub user_id: CredentialId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}
