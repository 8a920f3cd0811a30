#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, Set};
use warbler::config::Config;
use warbler::db::{self, DbPool};
use warbler::entities::{message, user};

/// Fresh in-memory database with all tables created.
pub async fn setup_db() -> DbPool {
    let config = Config::with_database_url("sqlite::memory:");
    let pool = db::create_pool(&config)
        .await
        .expect("Failed to create SQLite pool");
    db::create_tables(&pool)
        .await
        .expect("Failed to create tables");
    pool
}

/// Inserts a user directly, bypassing signup. The password is stored as is.
pub async fn create_user(db: &DbPool, n: u32) -> user::Model {
    user::ActiveModel {
        email: Set(format!("test{}@test.com", n)),
        username: Set(format!("testuser{}", n)),
        password: Set("HASHED_PASSWORD".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert user")
}

pub async fn create_message(db: &DbPool, author: &user::Model, text: &str) -> message::Model {
    message::ActiveModel::compose(Some(text), author.id)
        .expect("Message text should be valid")
        .insert(db)
        .await
        .expect("Failed to insert message")
}
