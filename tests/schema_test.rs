// Schema management tests.
// Run with: cargo test --test schema_test

mod common;

use common::{create_user, setup_db};
use sea_orm::EntityTrait;
use warbler::db;
use warbler::entities::prelude::{Follows, Likes, Message, User};

#[tokio::test]
async fn test_create_tables_is_idempotent() {
    let db = setup_db().await;
    create_user(&db, 1).await;

    db::create_tables(&db)
        .await
        .expect("Creating existing tables should be a no-op");

    assert_eq!(User::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_drop_and_recreate_tables() {
    let db = setup_db().await;
    create_user(&db, 1).await;

    db::drop_tables(&db).await.expect("Failed to drop tables");
    assert!(User::find().all(&db).await.is_err(), "users table should be gone");

    db::create_tables(&db).await.expect("Failed to recreate tables");
    assert!(User::find().all(&db).await.unwrap().is_empty());
    assert!(Message::find().all(&db).await.unwrap().is_empty());
    assert!(Follows::find().all(&db).await.unwrap().is_empty());
    assert!(Likes::find().all(&db).await.unwrap().is_empty());
}
