//! Random field generators for synthetic orders and trades.

use alloy::primitives::{U256, keccak256};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// `10^16`: one hundredth of an 18-decimals token.
const AMOUNT_UNIT: u64 = 10_000_000_000_000_000;

/// Upper bound (in hundredths) for random amounts.
const MAX_AMOUNT_UNITS: u64 = 100_000;

pub const ORDER_STATUSES: &[(&str, u32)] = &[
    ("NEW", 0),
    ("OPEN", 20),
    ("CANCELLED", 5),
    ("ERROR", 5),
    ("PARTIALLY_FILLED", 20),
    ("FILLED", 20),
    ("EXECUTED", 30),
];

pub const TRADE_STATUSES: &[(&str, u32)] = &[
    ("PENDING", 20),
    ("SUCCESS", 70),
    ("ERROR", 5),
    ("INVALID", 5),
];

/// Status table with cumulative percent levels.
#[derive(Debug, Clone)]
pub struct WeightedStatuses {
    names: Vec<&'static str>,
    levels: Vec<u32>,
}

impl WeightedStatuses {
    pub fn new(weights: &[(&'static str, u32)]) -> Self {
        let mut names = Vec::with_capacity(weights.len());
        let mut levels = Vec::with_capacity(weights.len());
        let mut cumulative = 0;

        for (name, weight) in weights {
            cumulative += weight;
            names.push(*name);
            levels.push(cumulative);
        }

        Self { names, levels }
    }

    pub fn orders() -> Self {
        Self::new(ORDER_STATUSES)
    }

    pub fn trades() -> Self {
        Self::new(TRADE_STATUSES)
    }

    /// Draws `n` in `[0, 100]` and returns the first status whose level
    /// exceeds it, or the last status.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        let n = rng.gen_range(0..=100);
        self.select(n)
    }

    fn select(&self, n: u32) -> &'static str {
        self.levels
            .iter()
            .position(|level| n < *level)
            .map(|idx| self.names[idx])
            .or_else(|| self.names.last().copied())
            .unwrap_or_default()
    }
}

/// `0x`-prefixed keccak-256 of 100 random bytes.
pub fn random_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 100];
    rng.fill(&mut bytes[..]);
    format!("0x{}", hex::encode(keccak256(bytes)))
}

/// Between 0 and 1000 tokens (18 decimals), in hundredths.
pub fn random_big_amount<R: Rng + ?Sized>(rng: &mut R) -> U256 {
    let units = rng.gen_range(0..=MAX_AMOUNT_UNITS);
    U256::from(units) * U256::from(AMOUNT_UNIT)
}

pub fn random_side<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    if rng.gen_bool(0.5) { "BUY" } else { "SELL" }
}

pub fn random_element<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

/// Filled amount consistent with an order status.
pub fn filled_amount<R: Rng + ?Sized>(rng: &mut R, status: &str, amount: U256) -> U256 {
    match status {
        "FILLED" => amount,
        "PARTIALLY_FILLED" => {
            let unit = U256::from(AMOUNT_UNIT);
            let units: u64 = (amount / unit).try_into().unwrap_or(MAX_AMOUNT_UNITS);
            U256::from(rng.gen_range(0..=units)) * unit
        }
        _ => U256::ZERO,
    }
}

/// Some instant within the last day.
pub fn recent_date<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    let now = Utc::now();
    date_between(rng, now - Duration::days(1), now)
}

pub fn date_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let (start_ms, end_ms) = (start.timestamp_millis(), end.timestamp_millis());
    if end_ms <= start_ms {
        return start;
    }

    let millis = rng.gen_range(start_ms..=end_ms);
    DateTime::from_timestamp_millis(millis).unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_order_levels() {
        let statuses = WeightedStatuses::orders();
        assert_eq!(statuses.levels, vec![0, 20, 25, 30, 50, 70, 100]);
        assert_eq!(statuses.select(0), "OPEN");
        assert_eq!(statuses.select(20), "CANCELLED");
        assert_eq!(statuses.select(69), "FILLED");
        assert_eq!(statuses.select(100), "EXECUTED");
    }

    #[test]
    fn test_zero_weight_never_picked() {
        let mut rng = StdRng::seed_from_u64(9);
        let statuses = WeightedStatuses::orders();
        for _ in 0..2_000 {
            assert_ne!(statuses.pick(&mut rng), "NEW");
        }
    }

    #[test]
    fn test_trade_statuses() {
        let statuses = WeightedStatuses::trades();
        assert_eq!(statuses.select(19), "PENDING");
        assert_eq!(statuses.select(89), "SUCCESS");
        assert_eq!(statuses.select(90), "ERROR");
        assert_eq!(statuses.select(100), "INVALID");
    }

    #[test]
    fn test_random_hash_format() {
        let mut rng = StdRng::seed_from_u64(1);
        let hash = random_hash(&mut rng);
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert_ne!(hash, random_hash(&mut rng));
    }

    #[test]
    fn test_big_amount_granularity() {
        let mut rng = StdRng::seed_from_u64(2);
        let max = U256::from(MAX_AMOUNT_UNITS) * U256::from(AMOUNT_UNIT);
        for _ in 0..100 {
            let amount = random_big_amount(&mut rng);
            assert!(amount <= max);
            assert_eq!(amount % U256::from(AMOUNT_UNIT), U256::ZERO);
        }
    }

    #[test]
    fn test_filled_amount_by_status() {
        let mut rng = StdRng::seed_from_u64(4);
        let amount = U256::from(500u64) * U256::from(AMOUNT_UNIT);

        assert_eq!(filled_amount(&mut rng, "FILLED", amount), amount);
        assert_eq!(filled_amount(&mut rng, "OPEN", amount), U256::ZERO);
        assert_eq!(filled_amount(&mut rng, "CANCELLED", amount), U256::ZERO);

        for _ in 0..50 {
            assert!(filled_amount(&mut rng, "PARTIALLY_FILLED", amount) <= amount);
        }
    }

    #[test]
    fn test_date_between_bounds() {
        let mut rng = StdRng::seed_from_u64(6);
        let end = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let start = end - Duration::days(30);
        for _ in 0..100 {
            let date = date_between(&mut rng, start, end);
            assert!(date >= start && date <= end);
        }
        assert_eq!(date_between(&mut rng, end, start), end);
    }

    #[test]
    fn test_random_element() {
        let mut rng = StdRng::seed_from_u64(8);
        let empty: [u8; 0] = [];
        assert_eq!(random_element(&mut rng, &empty), None);
        assert_eq!(random_element(&mut rng, &[3]), Some(&3));
    }
}
