use serde::{Deserialize, Serialize};
use std::fmt;

/// Account-creation request as it arrives from the caller. Required-field
/// checks happen in the registry, so everything here is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<i64>,
    pub password: Option<String>,
}

/// Validated, hashed record handed to the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbAccountCreate {
    pub username: String,
    pub email: String,
    pub phone: i64,
    pub password_hash: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Flag updates applied through the storage collaborator. Absent fields
/// are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountUpdate {
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_confirmed_email: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrivilegeLevel {
    Standard,
    Superuser,
}

impl fmt::Display for PrivilegeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivilegeLevel::Standard => write!(f, "standard"),
            PrivilegeLevel::Superuser => write!(f, "superuser"),
        }
    }
}
