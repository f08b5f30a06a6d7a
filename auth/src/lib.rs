//! Shared authentication library for the marketplace platform.
//!
//! Provides the security primitives every service needs:
//! - Password hashing (Argon2id)
//! - Signed session token issuance and validation (HS256 JWT)
//! - The platform role model and token claims
//!
//! Services that protect endpoints should depend on this crate and validate
//! tokens in-process with the shared signing secret, rather than calling the
//! auth service over the network on every request.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let record = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &record));
//! assert!(!hasher.verify("not_my_password", &record));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, JwtHandler, Role};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::for_user("user123", "a@x.com", Role::Designer, 24);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.role, Role::Designer);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, Role};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash password
//! let record = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("user123", "a@x.com", Role::Supplier, 24);
//! let result = auth.authenticate("password123", &record, &claims).unwrap();
//!
//! // Any service holding the secret validates locally
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.email, "a@x.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod role;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Role;
pub use role::RoleParseError;
