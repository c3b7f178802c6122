use mongodb::Database;

use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::models::Wallet;
use crate::schemas::WALLETS;
use crate::services::chain::identity_from_key;

use super::insert_all;

/// Operator wallets for every configured private key of the network.
pub fn build_wallet_documents(config: &SeedConfig) -> Result<Vec<Wallet>, SeedError> {
    config
        .wallet_keys
        .iter()
        .map(|key| {
            let identity = identity_from_key(key)?;
            Ok(Wallet {
                address: identity.address,
                private_key: identity.private_key,
                admin: true,
                operator: true,
            })
        })
        .collect()
}

pub async fn seed_wallets(db: &Database, config: &SeedConfig) -> Result<usize, SeedError> {
    let documents = build_wallet_documents(config)?;
    tracing::info!(network_id = %config.network_id, wallets = documents.len(), "Seeding wallets collection");
    insert_all(db, WALLETS, &documents).await
}
