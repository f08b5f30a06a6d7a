use async_trait::async_trait;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::credential::errors::AuthError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::CredentialId;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::models::ProfileRecord;
use crate::domain::credential::ports::CredentialStore;

pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> AuthError {
    tracing::error!(error = %e, "Credential store operation failed");
    AuthError::Storage(e.to_string())
}

fn credential_from_row(row: PgRow) -> Result<Credential, AuthError> {
    let role: String = row.try_get("role").map_err(storage_error)?;
    let role = role
        .parse::<Role>()
        .map_err(|e| AuthError::Storage(e.to_string()))?;

    Ok(Credential {
        id: CredentialId(row.try_get::<Uuid, _>("id").map_err(storage_error)?),
        email: EmailAddress::new(row.try_get("email").map_err(storage_error)?)?,
        password_hash: row.try_get("password_hash").map_err(storage_error)?,
        first_name: row.try_get("first_name").map_err(storage_error)?,
        last_name: row.try_get("last_name").map_err(storage_error)?,
        role,
        active: row.try_get("active").map_err(storage_error)?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(storage_error)?,
    })
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_active_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, first_name, last_name, role, active, created_at
            FROM credentials
            WHERE email = $1 AND active = TRUE
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(credential_from_row).transpose()
    }

    async fn create_with_profile(
        &self,
        credential: Credential,
        profile: &ProfileRecord,
    ) -> Result<Credential, AuthError> {
        // Both inserts commit or neither does; a profile failure must not
        // leave an orphaned credential
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        sqlx::query(
            r#"
            INSERT INTO credentials (id, email, password_hash, first_name, last_name, role, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(credential.id.0)
        .bind(credential.email.as_str())
        .bind(&credential.password_hash)
        .bind(&credential.first_name)
        .bind(&credential.last_name)
        .bind(credential.role.as_str())
        .bind(credential.active)
        .bind(credential.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // The unique index is the real guard against concurrent
                // registrations; the service-level check is advisory
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("credentials_email_key")
                {
                    return AuthError::DuplicateEmail;
                }
            }
            storage_error(e)
        })?;

        let details = profile.details();
        let profile_query = match profile {
            ProfileRecord::Designer(_) => {
                r#"
                INSERT INTO designers (user_id, company_name, contact_number, address, rating, created_at)
                VALUES ($1, $2, $3, $4, 0, $5)
                "#
            }
            ProfileRecord::Supplier(_) => {
                r#"
                INSERT INTO suppliers (user_id, company_name, contact_number, address, rating, created_at)
                VALUES ($1, $2, $3, $4, 0, $5)
                "#
            }
        };

        sqlx::query(profile_query)
            .bind(credential.id.0)
            .bind(details.company_name.as_deref())
            .bind(details.contact_number.as_deref())
            .bind(details.address.as_deref())
            .bind(credential.created_at)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;

        Ok(credential)
    }
}
