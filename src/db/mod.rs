use async_trait::async_trait;
use entity::user;
use uuid::Uuid;

use crate::types::error::AuthError;
use crate::types::user::{AccountUpdate, DbAccountCreate};

pub mod sql_store;
pub mod user_store;

pub use sql_store::SqlStore;

/// Contract the registry holds against whatever persists accounts.
/// `insert` must enforce the username/email/phone uniqueness constraints
/// atomically; collisions surface as [`AuthError::Unique`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert(&self, record: DbAccountCreate) -> Result<user::Model, AuthError>;
    async fn update(&self, id: Uuid, fields: AccountUpdate) -> Result<(), AuthError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, AuthError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AuthError>;
}
