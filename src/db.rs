//! Scoped database access
//!
//! Every tool follows the same shape: connect, run one operation, close.
//! [`with_database`] owns that shape so the client is shut down whether the
//! operation succeeds or fails.

use mongodb::{Client, Database};
use std::future::Future;

use crate::config::DatabaseConfig;
use crate::error::SeedError;

/// Connects to `config`, runs `operation` against the configured database
/// and shuts the client down before returning the operation's result.
pub async fn with_database<F, Fut, T>(config: &DatabaseConfig, operation: F) -> Result<T, SeedError>
where
    F: FnOnce(Database) -> Fut,
    Fut: Future<Output = Result<T, SeedError>>,
{
    tracing::info!(db = %config.db_name, "Connecting to database...");
    let client = Client::with_uri_str(&config.mongo_url).await?;
    let db = client.database(&config.db_name);

    let result = operation(db).await;

    if let Err(e) = &result {
        tracing::error!(db = %config.db_name, error = %e, "Database operation failed");
    }

    client.shutdown().await;
    tracing::debug!(db = %config.db_name, "Connection closed");

    result
}
