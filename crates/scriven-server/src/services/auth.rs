//! Authentication token service

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use scriven_core::{Result, ScrivenError};
use serde::{Deserialize, Serialize};

/// Token lifetime; clients re-login afterwards.
const TOKEN_TTL_DAYS: i64 = 30;

/// Issues and verifies the bearer tokens callers present.
///
/// Tokens are opaque to the rest of the system: everything else only sees
/// `issue_token` and `verify_token`.
pub struct AuthService {
    jwt_secret: String,
}

/// Identity carried by a verified token
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user_id
    email: String,
    exp: i64, // expiration time
    iat: i64, // issued at
}

impl AuthService {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    pub fn issue_token(&self, user_id: &str, email: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| ScrivenError::Token(e.to_string()))
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenIdentity> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| ScrivenError::Token(e.to_string()))?;

        Ok(TokenIdentity {
            user_id: token_data.claims.sub,
            email: token_data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips() {
        let service = AuthService::new("test-secret".to_string());
        let token = service.issue_token("user-1", "writer@example.com").unwrap();

        let identity = service.verify_token(&token).unwrap();
        assert_eq!(identity.user_id, "user-1");
        assert_eq!(identity.email, "writer@example.com");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = AuthService::new("test-secret".to_string());
        let token = service.issue_token("user-1", "writer@example.com").unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(service.verify_token(&tampered).is_err());
        assert!(service.verify_token("not-a-token").is_err());
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let issuer = AuthService::new("secret-a".to_string());
        let verifier = AuthService::new("secret-b".to_string());

        let token = issuer.issue_token("user-1", "writer@example.com").unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }
}
