use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::models::AuthResult;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::CredentialId;
use crate::domain::credential::models::LoginCommand;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::credential::ports::AuthGateway;
use crate::domain::credential::ports::CredentialStore;

/// Authentication gateway implementation.
///
/// Orchestrates the credential store, password hasher, and token issuer.
/// Stateless across requests; the only session state is the token itself.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
    fallback_hash: String,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Errors
    /// * `Password` - Hashing the fallback record failed
    pub fn new(
        store: Arc<CS>,
        authenticator: Arc<Authenticator>,
        token_ttl_hours: i64,
    ) -> Result<Self, AuthError> {
        // Verified against when a login email is unknown, so response
        // latency does not reveal whether the account exists.
        let fallback_hash = authenticator.hash_password("fallback-password")?;

        Ok(Self {
            store,
            authenticator,
            token_ttl_hours,
            fallback_hash,
        })
    }

    fn issue_result(&self, credential: &Credential) -> Result<AuthResult, AuthError> {
        let claims = Claims::for_user(
            credential.id,
            credential.email.as_str(),
            credential.role,
            self.token_ttl_hours,
        );
        let token = self.authenticator.issue_token(&claims)?;

        Ok(AuthResult {
            token,
            user_id: credential.id,
            email: credential.email.as_str().to_string(),
            first_name: credential.first_name.clone(),
            last_name: credential.last_name.clone(),
            role: credential.role,
        })
    }
}

#[async_trait]
impl<CS> AuthGateway for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthResult, AuthError> {
        // Advisory check only; the store's uniqueness constraint is the
        // guarantee against concurrent registrations for the same email.
        if self
            .store
            .find_active_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let credential = Credential {
            id: CredentialId::new(),
            email: command.email,
            password_hash,
            first_name: command.first_name,
            last_name: command.last_name,
            role: command.profile.role(),
            active: true,
            created_at: Utc::now(),
        };

        let credential = self
            .store
            .create_with_profile(credential, &command.profile)
            .await?;

        tracing::info!(user_id = %credential.id, role = %credential.role, "Account registered");

        self.issue_result(&credential)
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthResult, AuthError> {
        let Some(credential) = self.store.find_active_by_email(&command.email).await? else {
            // Burn a verification anyway; see `fallback_hash`.
            let _ = self
                .authenticator
                .verify_password(&command.password, &self.fallback_hash);
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .authenticator
            .verify_password(&command.password, &credential.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %credential.id, "Login succeeded");

        self.issue_result(&credential)
    }

    async fn validate_token(&self, token: &str) -> bool {
        match self.authenticator.validate_token(token) {
            Ok(_) => true,
            Err(e) => {
                // Internal diagnostics only; the caller sees a bare boolean
                // and the token body is never logged.
                tracing::debug!(reason = %e, "Token validation failed");
                false
            }
        }
    }
}
