//! Connection pool setup and migrations.
//!
//! Repository functions take any `SqliteExecutor`, so the same function runs
//! against the pool or inside a transaction started with `pool.begin()`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreResult;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Open a pool for `database_url`, creating the database file if needed.
///
/// An in-memory database lives only as long as its connection, so it gets a
/// single connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Some(Duration::from_secs(600)))
            .max_lifetime(Some(Duration::from_secs(1800)))
    };

    Ok(pool_options.connect_with(options).await?)
}

/// A fresh, migrated in-memory database.
pub async fn connect_in_memory() -> StoreResult<SqlitePool> {
    let pool = connect("sqlite::memory:", 1).await?;
    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
