use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

/// sea-orm-backed storage collaborator. Uniqueness is enforced by the
/// unique indexes the migration creates, so concurrent inserts cannot
/// both land.
#[derive(Clone)]
pub struct SqlStore {
    pub(crate) db: DatabaseConnection,
}

impl SqlStore {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("connecting to database...");
        let db = Database::connect(uri).await?;
        info!("running migrations...");
        Migrator::up(&db, None).await?;
        info!("database ready");
        Ok(Self { db })
    }
}
