use crate::config::Config;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .sqlx_logging(config.database.sql_logging);

    let db = Database::connect(options).await?;

    log::info!(
        "Connected to {:?} database (max {} connections)",
        db.get_database_backend(),
        config.database.max_connections
    );
    Ok(db)
}
