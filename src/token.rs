use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::types::error::AuthError;
use crate::types::token::Claims;

/// Signs and verifies identity tokens with a symmetric secret injected at
/// construction. Tokens are stateless; nothing here tracks or revokes
/// them, validity is signature plus expiry.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Configuration);
        }
        Ok(TokenIssuer {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Issue a token for the given account id, expiring seven days from
    /// now. The id is taken on trust; callers obtain it from a loaded
    /// account record.
    pub fn issue(&self, account_id: Uuid) -> Result<String, AuthError> {
        self.issue_at(account_id, Utc::now())
    }

    pub fn issue_at(&self, account_id: Uuid, iat: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims::new(account_id, iat);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify signature and expiry, returning the claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|_| AuthError::InvalidToken)?;
        Ok(data.claims)
    }
}
