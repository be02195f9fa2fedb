use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tokens expire a fixed seven days after issuance.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Payload of an issued identity token. `iat`/`exp` are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub exp: i64,
    pub iat: i64,
    pub id: Uuid,
}

impl Claims {
    pub fn new(id: Uuid, iat: DateTime<Utc>) -> Self {
        Claims {
            exp: (iat + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
            iat: iat.timestamp(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_exactly_seven_days_after_issuance() {
        let claims = Claims::new(Uuid::new_v4(), Utc::now());
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }
}
