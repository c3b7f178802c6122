use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION_KEY: &str = "schema_version";
pub const ETHEREUM_LAST_BLOCK_KEY: &str = "ethereum_last_block";
pub const ETHEREUM_ADDRESS_INDEX_KEY: &str = "ethereum_address_index";

/// Key/value row of the `config` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub key: String,
    pub value: i64,
    pub created_at: DateTime,
}
