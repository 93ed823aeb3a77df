//! Signed admin sessions.
//!
//! A session is an HS256 JWT naming the admin, with an absolute expiry.
//! It is stored client-side in a cookie and checked on every protected
//! request.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session-related errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The token's expiry has passed.
    #[error("session expired")]
    Expired,

    /// The token is malformed or its signature does not match.
    #[error("invalid session token")]
    Invalid,

    /// The token could not be created.
    #[error("failed to create session: {0}")]
    Encoding(String),
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (admin username).
    pub sub: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// Token ID.
    pub jti: String,
}

/// Issues and verifies session tokens.
#[derive(Clone)]
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl SessionManager {
    /// Create a manager signing with `secret`; sessions last `expiry_secs`.
    pub fn new(secret: &str, expiry_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_secs,
        }
    }

    /// Issue a token for `username`.
    pub fn issue(&self, username: &str) -> Result<String, SessionError> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let claims = SessionClaims {
            sub: username.to_string(),
            iat: now,
            exp: now + self.expiry_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };
        self.encode(&claims)
    }

    fn encode(&self, claims: &SessionClaims) -> Result<String, SessionError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| SessionError::Encoding(e.to_string()))
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid,
            })
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("expiry_secs", &self.expiry_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let manager = SessionManager::new("secret", 3600);

        let token = manager.issue("admin").unwrap();
        let claims = manager.verify(&token).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_tokens_are_unique() {
        let manager = SessionManager::new("secret", 3600);

        let a = manager.issue("admin").unwrap();
        let b = manager.issue("admin").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = SessionManager::new("secret-a", 3600);
        let verifier = SessionManager::new("secret-b", 3600);

        let token = issuer.issue("admin").unwrap();
        assert_eq!(verifier.verify(&token), Err(SessionError::Invalid));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let manager = SessionManager::new("secret", 3600);

        assert_eq!(manager.verify("not-a-token"), Err(SessionError::Invalid));
        assert_eq!(manager.verify(""), Err(SessionError::Invalid));
    }

    #[test]
    fn test_expired_token() {
        let manager = SessionManager::new("secret", 3600);
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = SessionClaims {
            sub: "admin".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            jti: "old".to_string(),
        };

        let token = manager.encode(&claims).unwrap();
        assert_eq!(manager.verify(&token), Err(SessionError::Expired));
    }
}
