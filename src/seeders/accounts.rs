use mongodb::Database;
use std::collections::BTreeMap;

use crate::config::{SeedConfig, checksum_address};
use crate::error::SeedError;
use crate::models::{Account, TokenBalance};
use crate::schemas::ACCOUNTS;
use crate::services::chain::identity_from_key;

use super::insert_all;

/// Starting balance and allowance for every seeded account (10^28).
pub const INITIAL_BALANCE: &str = "10000000000000000000000000000";

/// An unblocked account per wallet key, funded in every address-book token.
pub fn build_account_documents(config: &SeedConfig) -> Result<Vec<Account>, SeedError> {
    let mut balances = BTreeMap::new();
    for symbol in config.symbols() {
        let address = checksum_address(config.contract_address(symbol)?)?;
        balances.insert(
            address.clone(),
            TokenBalance {
                address,
                symbol: symbol.to_string(),
                balance: INITIAL_BALANCE.to_string(),
                allowance: INITIAL_BALANCE.to_string(),
                locked_balance: "0".to_string(),
            },
        );
    }

    config
        .wallet_keys
        .iter()
        .map(|key| {
            Ok(Account {
                address: identity_from_key(key)?.address,
                is_blocked: false,
                token_balances: balances.clone(),
            })
        })
        .collect()
}

pub async fn seed_accounts(db: &Database, config: &SeedConfig) -> Result<usize, SeedError> {
    let documents = build_account_documents(config)?;
    tracing::info!(accounts = documents.len(), "Seeding accounts collection");
    insert_all(db, ACCOUNTS, &documents).await
}
