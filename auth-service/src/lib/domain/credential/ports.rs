use async_trait::async_trait;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::models::AuthResult;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::models::LoginCommand;
use crate::domain::credential::models::ProfileRecord;
use crate::domain::credential::models::RegisterCommand;

/// Port for the authentication gateway.
///
/// Other platform services should not call this over the network per
/// request; they hold the shared secret and validate tokens in-process via
/// the `auth` crate. The gateway is the single writer of credentials.
#[async_trait]
pub trait AuthGateway: Send + Sync + 'static {
    /// Register a new account and issue its first session token.
    ///
    /// # Errors
    /// * `DuplicateEmail` - An active or inactive credential already uses this email
    /// * `Storage` - Persistence failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthResult, AuthError>;

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password; the two are
    ///   indistinguishable to the caller
    /// * `Storage` - Persistence failed
    async fn login(&self, command: LoginCommand) -> Result<AuthResult, AuthError>;

    /// Check a session token.
    ///
    /// All failure modes (expired, tampered, malformed) collapse into
    /// `false`; callers get no oracle on token structure.
    async fn validate_token(&self, token: &str) -> bool;
}

/// Persistence operations for the credential aggregate.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the active credential registered under `email`, if any.
    ///
    /// # Errors
    /// * `Storage` - Lookup failed
    async fn find_active_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, AuthError>;

    /// Persist a credential and its role-specific profile atomically.
    ///
    /// Both inserts succeed or neither remains; a profile failure must not
    /// leave an orphaned credential.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email uniqueness constraint violated
    /// * `Storage` - Persistence failed
    async fn create_with_profile(
        &self,
        credential: Credential,
        profile: &ProfileRecord,
    ) -> Result<Credential, AuthError>;
}
