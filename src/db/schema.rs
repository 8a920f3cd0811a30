use crate::db::DbPool;
use crate::entities::{follows, likes, message, user};
use sea_orm::sea_query::Table;
use sea_orm::{ConnectionTrait, EntityName, EntityTrait, Schema};

/// Creates every table that does not exist yet. Tables are built from the
/// entity definitions, so the same call works on Postgres and SQLite.
pub async fn create_tables(db: &DbPool) -> Result<(), anyhow::Error> {
    create_table(db, user::Entity).await?;
    create_table(db, message::Entity).await?;
    create_table(db, follows::Entity).await?;
    create_table(db, likes::Entity).await?;
    Ok(())
}

/// Drops all tables, children before parents.
pub async fn drop_tables(db: &DbPool) -> Result<(), anyhow::Error> {
    drop_table(db, likes::Entity).await?;
    drop_table(db, follows::Entity).await?;
    drop_table(db, message::Entity).await?;
    drop_table(db, user::Entity).await?;
    Ok(())
}

async fn create_table<E>(db: &DbPool, entity: E) -> Result<(), anyhow::Error>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    log::info!("Ensured table {}", E::default().table_name());
    Ok(())
}

async fn drop_table<E>(db: &DbPool, entity: E) -> Result<(), anyhow::Error>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let stmt = Table::drop().table(entity).if_exists().to_owned();

    db.execute(backend.build(&stmt)).await?;
    log::info!("Dropped table {}", E::default().table_name());
    Ok(())
}
