//! User queries
//!
//! Every function runs exactly one statement against whatever executor it is
//! handed: a pool for one-off calls, or `&mut *tx` inside a [`UnitOfWork`].
//!
//! [`UnitOfWork`]: crate::UnitOfWork

use roster_core::{error::Result, types::*};
use sqlx::{Executor, FromRow, Sqlite};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    firstname: String,
    lastname: String,
    age: i64,
    slug: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            firstname: row.firstname,
            lastname: row.lastname,
            age: row.age,
            slug: row.slug,
        }
    }
}

/// Get all users in storage order
pub async fn get_all<'e, E>(executor: E) -> Result<Vec<User>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, firstname, lastname, age, slug
         FROM users
         ORDER BY id",
    )
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(User::from).collect())
}

pub async fn get_by_id<'e, E>(executor: E, id: UserId) -> Result<Option<User>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, firstname, lastname, age, slug
         FROM users
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(User::from))
}

/// Insert a user, deriving its slug from the username
///
/// Fails with a duplicate error when the username is already taken.
pub async fn create<'e, E>(executor: E, user: CreateUser) -> Result<User>
where
    E: Executor<'e, Database = Sqlite>,
{
    let slug = user.slug();

    let row = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (username, firstname, lastname, age, slug)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, username, firstname, lastname, age, slug",
    )
    .bind(user.username)
    .bind(user.firstname)
    .bind(user.lastname)
    .bind(user.age)
    .bind(slug)
    .fetch_one(executor)
    .await?;

    Ok(row.into())
}

/// Overwrite the mutable fields of one user
///
/// Returns `false` when no row has the given id.
pub async fn update<'e, E>(executor: E, id: UserId, user: UpdateUser) -> Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "UPDATE users
         SET firstname = ?, lastname = ?, age = ?
         WHERE id = ?",
    )
    .bind(user.firstname)
    .bind(user.lastname)
    .bind(user.age)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a user. Returns `false` when no row has the given id.
pub async fn delete<'e, E>(executor: E, id: UserId) -> Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count<'e, E>(executor: E) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(executor)
        .await?;

    Ok(count)
}
