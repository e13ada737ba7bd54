use crate::{error::StorageError, users};
use roster_core::{error::Result, types::*, RosterError};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Local storage context using `SQLite`
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `database_url` and bring its schema up to date
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a unit of work on a fresh transaction
    pub async fn begin(&self) -> Result<UnitOfWork> {
        let tx = self.pool.begin().await?;
        Ok(UnitOfWork { tx })
    }
}

/// A request-scoped transaction
///
/// Nothing is persisted until [`UnitOfWork::commit`] is called. Dropping the
/// value without committing rolls back and returns the connection to the pool.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub async fn list_users(&mut self) -> Result<Vec<User>> {
        users::get_all(&mut *self.tx).await
    }

    pub async fn find_user(&mut self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&mut *self.tx, id).await
    }

    /// Like [`find_user`](Self::find_user), but a missing row is an error
    pub async fn get_user(&mut self, id: UserId) -> Result<User> {
        self.find_user(id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))
    }

    pub async fn create_user(&mut self, user: CreateUser) -> Result<User> {
        let created = users::create(&mut *self.tx, user).await?;
        tracing::debug!(user_id = created.id, slug = %created.slug, "inserted user");
        Ok(created)
    }

    pub async fn update_user(&mut self, id: UserId, user: UpdateUser) -> Result<()> {
        if !users::update(&mut *self.tx, id, user).await? {
            return Err(RosterError::not_found("User", id));
        }
        tracing::debug!(user_id = id, "updated user");
        Ok(())
    }

    pub async fn delete_user(&mut self, id: UserId) -> Result<()> {
        if !users::delete(&mut *self.tx, id).await? {
            return Err(RosterError::not_found("User", id));
        }
        tracing::debug!(user_id = id, "deleted user");
        Ok(())
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
