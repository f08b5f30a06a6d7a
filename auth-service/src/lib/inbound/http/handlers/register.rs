use auth::Role;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResultData;
use crate::domain::credential::errors::EmailError;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::models::ProfileDetails;
use crate::domain::credential::models::ProfileRecord;
use crate::domain::credential::models::RegisterCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<AuthResultData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref result| ApiSuccess::new(StatusCode::OK, result.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    role: String,
    company_name: Option<String>,
    contact_number: Option<String>,
    address: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid role: {0}")]
    Role(#[from] auth::RoleParseError),

    #[error("Role must be Designer or Supplier")]
    NotRegisterable,

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let email = EmailAddress::new(self.email)?;

        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::EmptyPassword);
        }

        let details = ProfileDetails {
            company_name: self.company_name,
            contact_number: self.contact_number,
            address: self.address,
        };

        let profile = match self.role.parse::<Role>()? {
            Role::Designer => ProfileRecord::Designer(details),
            Role::Supplier => ProfileRecord::Supplier(details),
            Role::Admin => return Err(ParseRegisterRequestError::NotRegisterable),
        };

        Ok(RegisterCommand {
            email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            profile,
        })
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
