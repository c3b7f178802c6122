use alloy::primitives::U256;
use mongodb::Database;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashMap;

use crate::config::{SeedConfig, checksum_address};
use crate::error::SeedError;
use crate::models::{Token, bson_date};
use crate::schemas::TOKENS;
use crate::services::synthetic::recent_date;

use super::insert_all;

/// One document per address-book symbol, plus the native currency when the
/// address book does not list it.
pub fn build_token_documents<R: Rng + ?Sized>(
    config: &SeedConfig,
    rng: &mut R,
) -> Result<Vec<Token>, SeedError> {
    let mut tokens = Vec::new();

    for symbol in config.symbols() {
        let address = checksum_address(config.contract_address(symbol)?)?;
        tokens.push(token_document(config, symbol, address, config.decimals_for(symbol), rng));
    }

    let native = &config.native_currency;
    if !config.contract_addresses.contains_key(&native.symbol) {
        let address = checksum_address(&native.address)?;
        tokens.push(token_document(config, &native.symbol, address, native.decimals, rng));
    }

    Ok(tokens)
}

fn token_document<R: Rng + ?Sized>(
    config: &SeedConfig,
    symbol: &str,
    contract_address: String,
    decimals: u32,
    rng: &mut R,
) -> Token {
    let quote = config.is_quote(symbol);
    let fee = |fees: &HashMap<String, U256>| {
        quote.then(|| fees.get(symbol)).flatten().map(|f| f.to_string())
    };

    Token {
        symbol: symbol.to_string(),
        contract_address,
        decimals: decimals as i32,
        quote,
        make_fee: fee(&config.make_fees),
        take_fee: fee(&config.take_fees),
        created_at: Some(bson_date(recent_date(rng))),
    }
}

pub async fn seed_tokens(db: &Database, config: &SeedConfig) -> Result<usize, SeedError> {
    tracing::info!(network = %config.network, "Seeding tokens collection");
    let documents = build_token_documents(config, &mut StdRng::from_entropy())?;
    insert_all(db, TOKENS, &documents).await
}
