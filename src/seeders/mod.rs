//! Seeders
//!
//! Each seeder pairs a pure `build_*` function (configuration and a random
//! source in, documents out) with an async `seed_*` that writes them.

pub mod accounts;
pub mod associations;
pub mod config_entries;
pub mod orders;
pub mod pairs;
pub mod queries;
pub mod tokens;
pub mod trades;
pub mod wallets;

use mongodb::Database;
use serde::Serialize;

use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::services::collections;

/// Inserts `documents` into `collection`; an empty batch is skipped.
pub(crate) async fn insert_all<T>(
    db: &Database,
    collection: &str,
    documents: &[T],
) -> Result<usize, SeedError>
where
    T: Serialize + Send + Sync,
{
    if documents.is_empty() {
        tracing::warn!(collection, "Nothing to insert");
        return Ok(0);
    }

    let result = db.collection::<T>(collection).insert_many(documents).await?;
    let inserted = result.inserted_ids.len();
    tracing::info!(collection, inserted, "Inserted documents");

    Ok(inserted)
}

/// Counts from a full database reset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResetSummary {
    pub collections_created: usize,
    pub tokens: usize,
    pub pairs: usize,
    pub wallets: usize,
    pub accounts: usize,
    pub config_entries: usize,
    pub associations: usize,
}

/// Drops the database, recreates every collection and seeds reference data
/// (tokens, pairs, wallets, accounts, config, associations).
pub async fn reset_database(db: &Database, config: &SeedConfig) -> Result<ResetSummary, SeedError> {
    collections::drop_database(db).await?;

    let mut summary = ResetSummary {
        collections_created: collections::create_all_collections(db).await?,
        ..Default::default()
    };

    summary.tokens = tokens::seed_tokens(db, config).await?;
    summary.pairs = pairs::seed_pairs(db, config).await?;
    summary.wallets = wallets::seed_wallets(db, config).await?;
    summary.accounts = accounts::seed_accounts(db, config).await?;
    summary.config_entries = config_entries::seed_config(db, config).await?;
    summary.associations = associations::seed_associations(db).await?;

    Ok(summary)
}
