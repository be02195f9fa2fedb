use async_trait::async_trait;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use super::{AccountStore, SqlStore};
use crate::types::error::{AuthError, UniqueField};
use crate::types::user::{AccountUpdate, DbAccountCreate};

impl SqlStore {
    pub async fn username_taken(&self, username: &str) -> Result<bool, AuthError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn email_taken(&self, email: &str) -> Result<bool, AuthError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn phone_taken(&self, phone: i64) -> Result<bool, AuthError> {
        Ok(User::find()
            .filter(Column::Phone.eq(phone))
            .count(&self.db)
            .await?
            > 0)
    }
}

#[async_trait]
impl AccountStore for SqlStore {
    async fn insert(&self, record: DbAccountCreate) -> Result<UserModel, AuthError> {
        // pre-checks give the caller a field-level conflict; the unique
        // indexes stay the atomic backstop for the race window, mapped
        // in AuthError::from_db
        if self.username_taken(&record.username).await? {
            return Err(AuthError::Unique(UniqueField::Username));
        }
        if self.email_taken(&record.email).await? {
            return Err(AuthError::Unique(UniqueField::Email));
        }
        if self.phone_taken(record.phone).await? {
            return Err(AuthError::Unique(UniqueField::Phone));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let created = UserActive {
            id: Set(Uuid::new_v4()),
            username: Set(record.username),
            email: Set(record.email),
            phone: Set(record.phone),
            password_hash: Set(record.password_hash),
            is_active: Set(true),
            is_staff: Set(record.is_staff),
            is_superuser: Set(record.is_superuser),
            is_confirmed_email: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        debug!(id = %created.id, "account row inserted");
        Ok(created)
    }

    async fn update(&self, id: Uuid, fields: AccountUpdate) -> Result<(), AuthError> {
        let user = self.find_by_id(id).await?.ok_or(AuthError::NotFound)?;
        let mut am: UserActive = user.into();
        if let Some(v) = fields.is_active {
            am.is_active = Set(v);
        }
        if let Some(v) = fields.is_staff {
            am.is_staff = Set(v);
        }
        if let Some(v) = fields.is_superuser {
            am.is_superuser = Set(v);
        }
        if let Some(v) = fields.is_confirmed_email {
            am.is_confirmed_email = Set(v);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, AuthError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, AuthError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }
}
