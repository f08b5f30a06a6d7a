use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth_service::domain::credential::errors::AuthError;
use auth_service::domain::credential::models::Credential;
use auth_service::domain::credential::models::EmailAddress;
use auth_service::domain::credential::models::ProfileRecord;
use auth_service::domain::credential::ports::AuthGateway;
use auth_service::domain::credential::ports::CredentialStore;
use auth_service::domain::credential::service::AuthService;
use auth_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

/// Test application that spawns the real router on a random port.
///
/// Uses an in-memory credential store so the suite runs without a database;
/// the HTTP surface, gateway logic, and token handling are all real.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

/// In-memory credential store enforcing the same email uniqueness the
/// Postgres unique index provides.
pub struct InMemoryCredentialStore {
    records: Mutex<Vec<(Credential, ProfileRecord)>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_active_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, AuthError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .map(|(credential, _)| credential)
            .find(|credential| credential.active && credential.email == *email)
            .cloned())
    }

    async fn create_with_profile(
        &self,
        credential: Credential,
        profile: &ProfileRecord,
    ) -> Result<Credential, AuthError> {
        let mut records = self.records.lock().unwrap();

        // Uniqueness covers active and inactive credentials alike
        if records.iter().any(|(c, _)| c.email == credential.email) {
            return Err(AuthError::DuplicateEmail);
        }

        records.push((credential.clone(), profile.clone()));
        Ok(credential)
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryCredentialStore::new());
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET).expect("valid test secret"));
        let auth_service: Arc<dyn AuthGateway> = Arc::new(
            AuthService::new(store, authenticator, 24).expect("failed to build auth service"),
        );

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(auth_service);
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub async fn register(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/auth/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute register request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/auth/login", self.address))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    pub async fn validate(&self, token: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/auth/validate", self.address))
            .body(token.to_string())
            .send()
            .await
            .expect("Failed to execute validate request")
    }
}
