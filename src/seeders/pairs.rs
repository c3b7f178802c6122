use futures_util::TryStreamExt;
use mongodb::{Database, bson::doc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{SeedConfig, checksum_address};
use crate::error::SeedError;
use crate::models::{Pair, Token, bson_date};
use crate::schemas::{PAIRS, TOKENS};
use crate::services::price_multiplier::price_multiplier;
use crate::services::synthetic::recent_date;

use super::insert_all;

/// Splits `BASE/QUOTE`.
pub fn split_pair_name(name: &str) -> Result<(&str, &str), SeedError> {
    match name.split_once('/') {
        Some((base, quote)) if !base.is_empty() && !quote.is_empty() => Ok((base, quote)),
        _ => Err(SeedError::ConfigError(format!("Invalid pair name '{}'", name))),
    }
}

fn find_token<'a>(symbol: &str, tokens: &'a [Token]) -> Result<&'a Token, SeedError> {
    tokens
        .iter()
        .find(|t| t.symbol == symbol)
        .ok_or_else(|| SeedError::UnknownToken(symbol.to_string()))
}

/// One pair per supported pair name, resolved against the seeded tokens.
pub fn build_pair_documents<R: Rng + ?Sized>(
    config: &SeedConfig,
    tokens: &[Token],
    rng: &mut R,
) -> Result<Vec<Pair>, SeedError> {
    config
        .supported_pairs
        .iter()
        .map(|name| {
            let (base_symbol, quote_symbol) = split_pair_name(name)?;
            let base = find_token(base_symbol, tokens)?;
            let quote = find_token(quote_symbol, tokens)?;

            Ok(Pair {
                base_token_symbol: base.symbol.clone(),
                base_token_address: checksum_address(&base.contract_address)?,
                base_token_decimals: base.decimals,
                quote_token_symbol: quote.symbol.clone(),
                quote_token_address: checksum_address(&quote.contract_address)?,
                quote_token_decimals: quote.decimals,
                price_multiplier: price_multiplier(
                    base.decimals.unsigned_abs(),
                    quote.decimals.unsigned_abs(),
                )
                .to_string(),
                active: true,
                make_fee: quote.make_fee.clone(),
                take_fee: quote.take_fee.clone(),
                created_at: Some(bson_date(recent_date(rng))),
            })
        })
        .collect()
}

pub async fn seed_pairs(db: &Database, config: &SeedConfig) -> Result<usize, SeedError> {
    let tokens: Vec<Token> = db
        .collection::<Token>(TOKENS)
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    tracing::info!(tokens = tokens.len(), "Seeding pairs collection");

    let documents = build_pair_documents(config, &tokens, &mut StdRng::from_entropy())?;
    for pair in &documents {
        tracing::debug!(pair = %pair.name(), multiplier = %pair.price_multiplier, "Built pair");
    }

    insert_all(db, PAIRS, &documents).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pair_name() {
        assert_eq!(split_pair_name("ETH/TOMO").unwrap(), ("ETH", "TOMO"));
        assert!(split_pair_name("ETHTOMO").is_err());
        assert!(split_pair_name("/TOMO").is_err());
    }
}
