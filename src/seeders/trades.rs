use chrono::{DateTime, TimeZone, Utc};
use futures_util::TryStreamExt;
use mongodb::{Database, bson::doc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{SeedConfig, checksum_address};
use crate::error::SeedError;
use crate::models::{Pair, Trade, bson_date};
use crate::schemas::{PAIRS, TRADES};
use crate::services::price_series::{
    PricePoint, PricingOptions, generate_pricing_data, interpolate_price,
};
use crate::services::synthetic::{
    WeightedStatuses, date_between, random_big_amount, random_element, random_hash, random_side,
};

use super::insert_all;

/// Trades per pair.
pub const DEFAULT_TRADE_COUNT: usize = 10_000;
/// Quote token whose pairs get trades when none is given.
pub const DEFAULT_QUOTE: &str = "USDT";

/// Largest markup applied on top of the interpolated price.
const PRICEPOINT_SPREAD: f64 = 0.05;

/// Trades are dated between 2017-07-01 UTC and now.
pub fn trade_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .with_ymd_and_hms(2017, 7, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    (start, Utc::now())
}

/// `floor(p + p * 0.05 * r)` with `r` in hundredths between 0 and 1.
pub fn trade_pricepoint<R: Rng + ?Sized>(rng: &mut R, interpolated: f64) -> i64 {
    let markup = rng.gen_range(0..=100) as f64 / 100.0;
    (interpolated + interpolated * PRICEPOINT_SPREAD * markup).floor() as i64
}

pub fn build_trade_documents<R: Rng + ?Sized>(
    config: &SeedConfig,
    pair: &Pair,
    pricing_data: &[PricePoint],
    window: (DateTime<Utc>, DateTime<Utc>),
    count: usize,
    rng: &mut R,
) -> Result<Vec<Trade>, SeedError> {
    let traders = config
        .trader_addresses
        .iter()
        .map(|a| checksum_address(a))
        .collect::<Result<Vec<_>, _>>()?;
    if traders.len() < 2 {
        return Err(SeedError::ConfigError(
            "At least two trader addresses are needed for maker/taker".to_string(),
        ));
    }

    let base_token = checksum_address(&pair.base_token_address)?;
    let quote_token = checksum_address(&pair.quote_token_address)?;
    let statuses = WeightedStatuses::trades();

    let mut trades = Vec::with_capacity(count);
    for _ in 0..count {
        let taker = random_element(rng, &traders).cloned().unwrap_or_default();
        let makers: Vec<&String> = traders.iter().filter(|a| **a != taker).collect();
        let maker = random_element(rng, &makers).map(|m| m.to_string()).unwrap_or_default();

        let created_at = date_between(rng, window.0, window.1);
        let interpolated = interpolate_price(pricing_data, created_at.timestamp_millis())?;

        trades.push(Trade {
            taker,
            maker,
            hash: random_hash(rng),
            base_token: base_token.clone(),
            quote_token: quote_token.clone(),
            maker_order_hash: random_hash(rng),
            taker_order_hash: random_hash(rng),
            tx_hash: random_hash(rng),
            status: statuses.pick(rng).to_string(),
            pair_name: pair.name(),
            pricepoint: trade_pricepoint(rng, interpolated).to_string(),
            side: random_side(rng).to_string(),
            amount: random_big_amount(rng).to_string(),
            created_at: bson_date(created_at),
        });
    }

    Ok(trades)
}

/// Seeds `count` trades for every pair quoted in `quote`, each pair with its
/// own hourly price series.
pub async fn seed_trades(
    db: &Database,
    config: &SeedConfig,
    quote: &str,
    count: usize,
) -> Result<usize, SeedError> {
    let pairs: Vec<Pair> = db
        .collection::<Pair>(PAIRS)
        .find(doc! { "quoteTokenSymbol": quote })
        .await?
        .try_collect()
        .await?;

    if pairs.is_empty() {
        tracing::warn!(quote, "No pairs quoted in this token");
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let window = trade_window();
    let mut total = 0;

    for pair in &pairs {
        let pricing_data = generate_pricing_data(
            &mut rng,
            PricingOptions {
                start: Some(window.0.timestamp_millis()),
                end: Some(window.1.timestamp_millis()),
                ..Default::default()
            },
        )?;

        let documents = build_trade_documents(config, pair, &pricing_data, window, count, &mut rng)?;
        total += insert_all(db, TRADES, &documents).await?;
        tracing::info!(pair = %pair.name(), trades = documents.len(), "Inserted trades");
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_pricepoint_markup() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let pricepoint = trade_pricepoint(&mut rng, 1_000_000.0);
            assert!((1_000_000..=1_050_000).contains(&pricepoint));
        }
    }

    #[test]
    fn test_trade_window() {
        let (start, end) = trade_window();
        assert_eq!(start.timestamp_millis(), 1_498_867_200_000);
        assert!(end > start);
    }
}
