use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Uses Argon2id with a random per-password salt. The output is a PHC
/// string embedding algorithm, parameters, salt, and digest, so stored
/// records stay verifiable if the default cost parameters change later.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored record.
    ///
    /// Recomputes the hash with the parameters embedded in the record and
    /// compares digests in constant time. A malformed record verifies as
    /// `false` rather than producing an error, so login failures stay
    /// indistinguishable to the caller.
    pub fn verify(&self, password: &str, record: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(record) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let record = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &record));
        assert!(!hasher.verify("wrong_password", &record));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new();
        let password = "same_password";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        // Distinct salts produce distinct records that both verify
        assert_ne!(first, second);
        assert!(hasher.verify(password, &first));
        assert!(hasher.verify(password, &second));
    }

    #[test]
    fn test_record_is_self_describing() {
        let hasher = PasswordHasher::new();
        let record = hasher.hash("password").expect("Failed to hash password");

        assert!(record.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_malformed_record() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
    }
}
