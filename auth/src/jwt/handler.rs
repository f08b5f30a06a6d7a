use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Session token handler for encoding and decoding signed tokens.
///
/// Uses HS256 (HMAC with SHA-256) over the standard three-part
/// `header.payload.signature` base64url layout, so tokens interoperate with
/// any JWT-compliant verifier holding the same secret.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler with a symmetric signing secret.
    ///
    /// The same secret must be shared by every service that validates
    /// tokens locally; this is the platform's cross-service contract.
    ///
    /// # Errors
    /// * `EmptySecret` - Secret is empty (startup misconfiguration)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Recomputes the signature, then checks `exp` against the current time
    /// with zero clock-skew leeway. Structural problems (wrong part count,
    /// undecodable base64url, missing claims) are rejected as malformed.
    ///
    /// # Errors
    /// * `Expired` - Current time is at or past `exp`
    /// * `InvalidSignature` - Signature does not match header+payload
    /// * `Malformed` - Token is structurally invalid
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked manually below: a token is invalid from the
        // moment the clock reaches exp, with zero clock-skew leeway
        validation.validate_exp = false;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn handler() -> JwtHandler {
        JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap()
    }

    #[test]
    fn test_new_rejects_empty_secret() {
        let result = JwtHandler::new(b"");
        assert!(matches!(result, Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = handler();
        let claims = Claims::for_user("user123", "a@x.com", Role::Designer, 24);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = handler();
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!").unwrap();

        let claims = Claims::for_user("user123", "a@x.com", Role::Supplier, 24);
        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let handler = handler();
        let claims = Claims::for_user("user123", "a@x.com", Role::Supplier, 24);
        let token = handler.encode(&claims).expect("Failed to encode token");

        // Flip one character in the payload segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(handler.decode(&tampered).is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = handler();
        let mut claims = Claims::for_user("user123", "a@x.com", Role::Designer, 24);
        claims.iat -= 7200;
        claims.exp = claims.iat + 3600; // Expired an hour ago

        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token);
        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_decode_malformed_tokens() {
        let handler = handler();

        assert!(matches!(handler.decode(""), Err(JwtError::Malformed(_))));
        assert!(matches!(
            handler.decode("only.two"),
            Err(JwtError::Malformed(_))
        ));
        assert!(matches!(
            handler.decode("not-base64url.!!.also-bad"),
            Err(JwtError::Malformed(_))
        ));
    }
}
