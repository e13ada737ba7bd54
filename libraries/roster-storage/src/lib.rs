//! Roster Storage
//!
//! `SQLite` database layer for the Roster user service.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each resource owns its queries (`users`)
//! - **Unit of Work**: request handlers get a [`UnitOfWork`] that wraps one
//!   transaction and is committed or rolled back as a whole
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{create_pool, run_migrations, LocalStorageContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://roster.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let mut uow = storage.begin().await?;
//! let users = uow.list_users().await?;
//! uow.commit().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::{LocalStorageContext, UnitOfWork};
pub use error::StorageError;

pub type Database = LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(database_url, max_connections, "database pool ready");

    Ok(pool)
}
