use warbler::config::Config;
use warbler::db::{create_pool, create_tables, drop_tables};

/// Prepares the Warbler database: connects using `DATABASE_URL` and creates
/// any missing tables. Pass `--reset` to drop everything first.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()?;
    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");

    let pool = create_pool(&config).await?;

    if reset {
        log::warn!("Dropping all tables");
        drop_tables(&pool).await?;
    }

    create_tables(&pool).await?;
    log::info!("Database schema is ready");

    Ok(())
}
