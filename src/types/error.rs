use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    // caller mistakes
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0} already taken")]
    Unique(UniqueField),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("not found")]
    NotFound,

    // infra things
    #[error("signing secret is not configured")]
    Configuration,
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueField {
    Username,
    Email,
    Phone,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::Unique(_) => "ALREADY_EXISTS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidCredentials => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::NotFound => "NOT_FOUND",
            Self::Configuration => "CONFIG_ERROR",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Shape consumed by whatever transport sits above this crate.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(_) = &err {
            return AuthError::NotFound;
        }
        // unique violations that slip past the pre-checks (concurrent
        // inserts) still map to a field-level conflict where the
        // constraint name allows it
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                let msg = msg.to_lowercase();
                if msg.contains("username") {
                    AuthError::Unique(UniqueField::Username)
                } else if msg.contains("email") {
                    AuthError::Unique(UniqueField::Email)
                } else if msg.contains("phone") {
                    AuthError::Unique(UniqueField::Phone)
                } else {
                    AuthError::Db(err)
                }
            }
            _ => AuthError::Db(err),
        }
    }
}

impl From<DbErr> for AuthError {
    fn from(e: DbErr) -> Self {
        AuthError::from_db(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_errors_name_the_field() {
        let err = AuthError::Unique(UniqueField::Email);
        assert_eq!(err.to_string(), "email already taken");
        assert_eq!(err.kind(), "ALREADY_EXISTS");
    }

    #[test]
    fn body_carries_kind_and_message() {
        let body = AuthError::MissingField("username").body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "MISSING_FIELD");
        assert_eq!(json["message"], "missing required field: username");
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err: AuthError = DbErr::RecordNotFound("user".into()).into();
        assert!(matches!(err, AuthError::NotFound));
    }
}
