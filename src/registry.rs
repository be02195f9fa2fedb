use std::sync::OnceLock;

use regex::Regex;
use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

use entity::user;

use crate::db::AccountStore;
use crate::types::error::AuthError;
use crate::types::user::{AccountUpdate, DbAccountCreate, NewAccount, PrivilegeLevel};
use crate::utils::password;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_re() -> &'static Regex {
    USERNAME_RE.get_or_init(|| Regex::new(r"^[0-9a-zA-Z]*$").unwrap())
}

/// Owns the account invariants: required fields, username charset, email
/// canonicalization, password hashing. Persistence goes through the
/// injected [`AccountStore`].
pub struct AccountRegistry<S> {
    store: S,
}

impl<S: AccountStore> AccountRegistry<S> {
    pub fn new(store: S) -> Self {
        AccountRegistry { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an ordinary account. The password is optional; accounts
    /// created without one cannot authenticate until a hash is set by an
    /// out-of-band flow.
    pub async fn create_account(&self, req: NewAccount) -> Result<user::Model, AuthError> {
        self.create_with_privileges(req, PrivilegeLevel::Standard)
            .await
    }

    /// Create an account that is born staff and superuser. Elevation is a
    /// single insert, so no reader can ever observe the record without its
    /// flags.
    pub async fn create_superuser(&self, req: NewAccount) -> Result<user::Model, AuthError> {
        if req.password.is_none() {
            return Err(AuthError::MissingField("password"));
        }
        self.create_with_privileges(req, PrivilegeLevel::Superuser)
            .await
    }

    async fn create_with_privileges(
        &self,
        req: NewAccount,
        level: PrivilegeLevel,
    ) -> Result<user::Model, AuthError> {
        let username = req.username.ok_or(AuthError::MissingField("username"))?;
        let email = req.email.ok_or(AuthError::MissingField("email"))?;
        let phone = req.phone.ok_or(AuthError::MissingField("phone"))?;

        if !username_re().is_match(&username) {
            return Err(AuthError::Validation(
                "username should only contain alphanumeric characters".into(),
            ));
        }

        let email = normalize_email(&email);
        if !email.validate_email() {
            return Err(AuthError::Validation("invalid email address".into()));
        }

        let password_hash = match req.password.as_deref() {
            Some(plain) => {
                Some(password::hash(plain).map_err(|e| AuthError::Internal(e.to_string()))?)
            }
            None => None,
        };

        let elevated = level == PrivilegeLevel::Superuser;
        let created = self
            .store
            .insert(DbAccountCreate {
                username,
                email,
                phone,
                password_hash,
                is_staff: elevated,
                is_superuser: elevated,
            })
            .await?;

        info!(username = %created.username, level = %level, "account created");
        Ok(created)
    }

    /// Look up by the login identifier and verify the password. Inactive
    /// accounts and accounts without a usable password are rejected the
    /// same way as a bad password, so there is no probe oracle.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<user::Model, AuthError> {
        let email = normalize_email(email);
        let user = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        if !user.is_active {
            return Err(AuthError::InvalidCredentials);
        }
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;
        let ok = password::verify(password, hash).map_err(|e| AuthError::Internal(e.to_string()))?;
        if !ok {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user)
    }

    pub async fn confirm_email(&self, id: Uuid) -> Result<(), AuthError> {
        self.store
            .update(
                id,
                AccountUpdate {
                    is_confirmed_email: Some(true),
                    ..Default::default()
                },
            )
            .await
    }

    pub async fn find_account(&self, id: Uuid) -> Result<user::Model, AuthError> {
        self.store.find_by_id(id).await?.ok_or(AuthError::NotFound)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<user::Model, AuthError> {
        self.store
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::NotFound)
    }
}

/// Trim surrounding whitespace and lowercase the domain part. The local
/// part keeps its case (mailbox names are case-sensitive per RFC 5321).
pub fn normalize_email(email: &str) -> String {
    let trimmed = email.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_domain_only() {
        assert_eq!(normalize_email("Alice@EXAMPLE.Com"), "Alice@example.com");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_email("  bob@example.com \n"), "bob@example.com");
    }

    #[test]
    fn normalize_splits_at_last_at_sign() {
        assert_eq!(normalize_email(r#""a@b"@HOST.example"#), r#""a@b"@host.example"#);
    }

    #[test]
    fn username_charset() {
        assert!(username_re().is_match("alice1"));
        assert!(username_re().is_match(""));
        assert!(!username_re().is_match("alice space"));
        assert!(!username_re().is_match("alice@1"));
        assert!(!username_re().is_match("alice-1"));
    }
}
