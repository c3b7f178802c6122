use mongodb::Database;

use crate::error::SeedError;
use crate::models::Association;
use crate::schemas::ASSOCIATIONS;
use crate::services::collections;

use super::insert_all;

pub const DEFAULT_CHAIN: &str = "ethereum";
pub const DEFAULT_ADDRESS: &str = "787DFF5A56CF30D676E45D8DE4518C03C335386E";
const DEFAULT_ASSOCIATED_ADDRESS: &str = "0x59B8515E7fF389df6926Cd52a086B0f1f46C630A";

/// Association rows are stored with an upper-case, unprefixed address.
pub fn build_association_documents() -> Vec<Association> {
    vec![Association {
        chain: DEFAULT_CHAIN.to_string(),
        address: DEFAULT_ADDRESS.to_uppercase(),
        associated_address: DEFAULT_ASSOCIATED_ADDRESS.to_string(),
    }]
}

pub async fn seed_associations(db: &Database) -> Result<usize, SeedError> {
    collections::create_collection(db, ASSOCIATIONS).await?;
    insert_all(db, ASSOCIATIONS, &build_association_documents()).await
}
