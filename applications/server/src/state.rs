/// Shared application state
use roster_storage::Database;

/// Application state shared across all handlers
///
/// Holds only the connection pool. Each request opens its own unit of work
/// from it, so no database session is ever shared between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
