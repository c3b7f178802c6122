use chrono::{DateTime, Utc};
use mongodb::Database;
use rand::{SeedableRng, rngs::StdRng};

use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::models::config_entry::{
    ConfigEntry, ETHEREUM_ADDRESS_INDEX_KEY, ETHEREUM_LAST_BLOCK_KEY, SCHEMA_VERSION_KEY,
};
use crate::models::bson_date;
use crate::schemas::CONFIG;
use crate::services::{chain, collections, synthetic::recent_date};

use super::insert_all;

pub const SCHEMA_VERSION: i64 = 2;

pub fn build_config_entries(ethereum_last_block: u64, created_at: DateTime<Utc>) -> Vec<ConfigEntry> {
    let created_at = bson_date(created_at);
    let entry = |key: &str, value: i64| ConfigEntry {
        key: key.to_string(),
        value,
        created_at,
    };

    vec![
        entry(SCHEMA_VERSION_KEY, SCHEMA_VERSION),
        entry(ETHEREUM_LAST_BLOCK_KEY, ethereum_last_block as i64),
        entry(ETHEREUM_ADDRESS_INDEX_KEY, 0),
    ]
}

/// Writes the config rows; the last block comes from the JSON-RPC endpoint
/// when one is configured and is 0 otherwise.
pub async fn seed_config(db: &Database, config: &SeedConfig) -> Result<usize, SeedError> {
    let last_block = match &config.rpc_url {
        Some(rpc_url) => chain::latest_block_number(rpc_url).await?,
        None => {
            tracing::warn!("No RPC URL configured, ethereum_last_block set to 0");
            0
        }
    };

    collections::create_collection(db, CONFIG).await?;

    let created_at = recent_date(&mut StdRng::from_entropy());
    let documents = build_config_entries(last_block, created_at);
    insert_all(db, CONFIG, &documents).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_entries() {
        let entries = build_config_entries(12_345, Utc::now());
        let values: Vec<(&str, i64)> = entries.iter().map(|e| (e.key.as_str(), e.value)).collect();
        assert_eq!(
            values,
            vec![
                ("schema_version", 2),
                ("ethereum_last_block", 12_345),
                ("ethereum_address_index", 0),
            ]
        );
    }
}
