use uuid::Uuid;
use warden_auth::db::SqlStore;
use warden_auth::registry::AccountRegistry;

pub struct TestContext {
    pub registry: AccountRegistry<SqlStore>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // in-memory sqlite runs the same migrations the production
        // database gets, unique indexes included. A named shared-cache
        // database keeps every pooled connection on the same data; the
        // random name isolates parallel tests from each other.
        let url = format!(
            "sqlite:file:{}?mode=memory&cache=shared",
            Uuid::new_v4().simple()
        );
        let store = SqlStore::new(&url)
            .await
            .expect("Failed to initialize sqlite store");

        TestContext {
            registry: AccountRegistry::new(store),
        }
    }
}

// Test data helpers
pub mod test_data {
    use warden_auth::types::user::NewAccount;

    pub fn sample_account() -> NewAccount {
        NewAccount {
            username: Some("alice1".to_string()),
            email: Some("alice@example.com".to_string()),
            phone: Some(5551234),
            password: Some("Secret123!".to_string()),
        }
    }

    pub fn account_with(username: &str, email: &str, phone: i64) -> NewAccount {
        NewAccount {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone),
            password: Some("Other456!".to_string()),
        }
    }
}
