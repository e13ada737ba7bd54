/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that matched nothing
        id: String,
    },

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl RosterError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Whether this error means the addressed entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Self::Duplicate(db.message().to_string())
            }
            other => Self::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = RosterError::not_found("User", 7);
        assert_eq!(err.to_string(), "User not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn other_errors_are_not_not_found() {
        assert!(!RosterError::Database("disk I/O error".to_string()).is_not_found());
        assert!(!RosterError::Duplicate("username".to_string()).is_not_found());
    }
}
