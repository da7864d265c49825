//! Shared application state passed to all request handlers.

use mongodb::{Client, Database};

/// Application state, cloned per handler (cheap Arc clones).
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, shares the underlying connection pool
    pub mongo_client: Client,
    /// Handle to the catalog database
    pub db: Database,
}
