use futures_util::TryStreamExt;
use mongodb::{Database, bson::doc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{SeedConfig, checksum_address};
use crate::error::SeedError;
use crate::models::{Order, Pair, bson_date};
use crate::schemas::{ORDERS, PAIRS};
use crate::services::price_series::{PricepointRange, generate_random_pricepoint_range};
use crate::services::synthetic::{
    WeightedStatuses, filled_amount, random_big_amount, random_element, random_hash, random_side,
    recent_date,
};

use super::insert_all;

pub const DEFAULT_ORDER_COUNT: usize = 20_000;

/// Orders are spread over this many trader accounts.
pub const ORDER_USERS: usize = 4;

/// Pricepoint band of one pair: BUY orders land in `[min, average]`, SELL
/// orders in `[average, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairPricing {
    pub range: PricepointRange,
    pub average: i64,
}

impl PairPricing {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let range = generate_random_pricepoint_range(rng);
        let mid = (range.min + range.max) / 2;
        let average = rng.gen_range((range.min + mid) / 2..=(range.max + mid) / 2);
        Self { range, average }
    }

    pub fn pricepoint<R: Rng + ?Sized>(&self, rng: &mut R, side: &str) -> i64 {
        if side == "BUY" {
            rng.gen_range(self.range.min..=self.average)
        } else {
            rng.gen_range(self.average..=self.range.max)
        }
    }
}

pub fn build_order_documents<R: Rng + ?Sized>(
    config: &SeedConfig,
    pairs: &[Pair],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Order>, SeedError> {
    if pairs.is_empty() {
        tracing::warn!("No pairs found, no orders to build");
        return Ok(Vec::new());
    }

    let users = config
        .trader_addresses
        .iter()
        .take(ORDER_USERS)
        .map(|a| checksum_address(a))
        .collect::<Result<Vec<_>, _>>()?;
    if users.is_empty() {
        return Err(SeedError::ConfigError("No trader addresses configured".to_string()));
    }

    let exchange_address = checksum_address(&config.exchange_address)?;
    let statuses = WeightedStatuses::orders();

    let pricing: Vec<(&Pair, PairPricing)> = pairs
        .iter()
        .map(|pair| (pair, PairPricing::random(rng)))
        .collect();

    let mut orders = Vec::with_capacity(count);
    for _ in 0..count {
        let Some((pair, band)) = random_element(rng, &pricing) else {
            break;
        };
        let side = random_side(rng);
        let status = statuses.pick(rng);
        let amount = random_big_amount(rng);
        let filled = filled_amount(rng, status, amount);
        let user = random_element(rng, &users).cloned().unwrap_or_default();

        orders.push(Order {
            exchange_address: exchange_address.clone(),
            user_address: user,
            base_token: checksum_address(&pair.base_token_address)?,
            quote_token: checksum_address(&pair.quote_token_address)?,
            pair_name: pair.name(),
            hash: random_hash(rng),
            side: side.to_string(),
            status: status.to_string(),
            make_fee: "0".to_string(),
            take_fee: "0".to_string(),
            amount: amount.to_string(),
            pricepoint: band.pricepoint(rng, side).to_string(),
            filled_amount: filled.to_string(),
            created_at: bson_date(recent_date(rng)),
        });
    }

    Ok(orders)
}

pub async fn seed_orders(db: &Database, config: &SeedConfig, count: usize) -> Result<usize, SeedError> {
    let pairs: Vec<Pair> = db
        .collection::<Pair>(PAIRS)
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    tracing::info!(pairs = pairs.len(), count, "Seeding orders collection");

    let documents = build_order_documents(config, &pairs, count, &mut StdRng::from_entropy())?;
    insert_all(db, ORDERS, &documents).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_pricing_sides() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let pricing = PairPricing::random(&mut rng);
            assert!(pricing.range.min <= pricing.average && pricing.average <= pricing.range.max);

            let buy = pricing.pricepoint(&mut rng, "BUY");
            assert!(buy >= pricing.range.min && buy <= pricing.average);

            let sell = pricing.pricepoint(&mut rng, "SELL");
            assert!(sell >= pricing.average && sell <= pricing.range.max);
        }
    }
}
