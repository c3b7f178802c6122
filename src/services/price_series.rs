//! Synthetic price series
//!
//! Generates a bounded random-walk price history over a fixed time grid and
//! answers price lookups for arbitrary timestamps against it. Used by the
//! order and trade seeders to give synthetic records plausible pricepoints.

use chrono::{TimeZone, Utc};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Relative step bound used by the random walk and by interpolation.
pub const VOLATILITY: f64 = 0.00001;

/// Inclusive band for random initial prices and pricepoint ranges.
pub const MIN_PRICE: i64 = 999_000;
pub const MAX_PRICE: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceSeriesError {
    InvalidInterval(String),
    EmptySeries,
}

impl fmt::Display for PriceSeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSeriesError::InvalidInterval(name) => {
                write!(f, "Invalid interval '{}' (expected second, minute, hour or day)", name)
            }
            PriceSeriesError::EmptySeries => write!(f, "Price series needs at least one sample"),
        }
    }
}

impl std::error::Error for PriceSeriesError {}

/// Sampling step of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    Second,
    Minute,
    #[default]
    Hour,
    Day,
}

impl Interval {
    pub fn as_millis(self) -> i64 {
        match self {
            Interval::Second => 1_000,
            Interval::Minute => 60 * 1_000,
            Interval::Hour => 60 * 60 * 1_000,
            Interval::Day => 24 * 60 * 60 * 1_000,
        }
    }
}

impl FromStr for Interval {
    type Err = PriceSeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" => Ok(Interval::Second),
            "minute" => Ok(Interval::Minute),
            "hour" => Ok(Interval::Hour),
            "day" => Ok(Interval::Day),
            other => Err(PriceSeriesError::InvalidInterval(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricepointRange {
    pub min: i64,
    pub max: i64,
}

/// Optional knobs for [`generate_pricing_data`]; unset fields take defaults.
#[derive(Debug, Clone, Default)]
pub struct PricingOptions {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub interval: Option<Interval>,
    pub initial_price: Option<f64>,
    pub volatility: Option<f64>,
}

/// Timestamps (ms) from `start` (exclusive) stepping by `interval`, up to and
/// including the last step that does not pass `end`.
///
/// The interval is given by name so callers can pass CLI input through; an
/// unknown name is rejected rather than defaulted.
pub fn generate_timestamps(
    start: i64,
    end: i64,
    interval: &str,
) -> Result<Vec<i64>, PriceSeriesError> {
    let interval: Interval = interval.parse()?;
    Ok(timestamps_for(start, end, interval))
}

fn timestamps_for(start: i64, end: i64, interval: Interval) -> Vec<i64> {
    let step = interval.as_millis();
    let mut timestamps = Vec::new();
    let mut current = start;

    while let Some(next) = current.checked_add(step).filter(|next| *next <= end) {
        timestamps.push(next);
        current = next;
    }

    timestamps
}

/// One step of the bounded random walk.
pub fn next_price<R: Rng + ?Sized>(rng: &mut R, previous_price: f64, volatility: f64) -> f64 {
    let mut change = 2.0 * volatility * rng.gen_range(0.0..1.0);
    if change > volatility {
        change -= 2.0 * volatility;
    }

    previous_price + previous_price * change
}

/// Walks a price over the given timestamps, one sample per timestamp.
///
/// Prices are not clamped; with a large enough volatility the walk can cross
/// zero.
pub fn generate_prices<R: Rng + ?Sized>(
    rng: &mut R,
    timestamps: &[i64],
    initial_price: f64,
    volatility: f64,
) -> Result<Vec<PricePoint>, PriceSeriesError> {
    let (first, rest) = timestamps
        .split_first()
        .ok_or(PriceSeriesError::EmptySeries)?;

    let mut prices = Vec::with_capacity(timestamps.len());
    prices.push(PricePoint {
        timestamp: *first,
        price: initial_price,
    });

    let mut price = initial_price;
    for timestamp in rest {
        price = next_price(rng, price, volatility);
        prices.push(PricePoint {
            timestamp: *timestamp,
            price,
        });
    }

    Ok(prices)
}

/// Default series start: 2016-02-01 UTC.
pub fn default_start() -> i64 {
    Utc.with_ymd_and_hms(2016, 2, 1, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_default()
}

pub fn generate_pricing_data<R: Rng + ?Sized>(
    rng: &mut R,
    options: PricingOptions,
) -> Result<Vec<PricePoint>, PriceSeriesError> {
    let start = options.start.unwrap_or_else(default_start);
    let end = options.end.unwrap_or_else(|| Utc::now().timestamp_millis());
    let interval = options.interval.unwrap_or_default();
    let initial_price = options
        .initial_price
        .unwrap_or_else(|| rng.gen_range(MIN_PRICE..=MAX_PRICE) as f64);
    let volatility = options.volatility.unwrap_or(VOLATILITY);

    let timestamps = timestamps_for(start, end, interval);
    tracing::debug!(
        samples = timestamps.len(),
        interval_ms = interval.as_millis(),
        initial_price,
        "Generating price series"
    );

    generate_prices(rng, &timestamps, initial_price, volatility)
}

/// Price at `timestamp`, biased from the earlier bracketing sample toward the
/// later one by a signed, volatility-scaled fraction of the step.
///
/// This keeps the seeding output stable against historical data; it is not
/// linear interpolation between the two samples. Timestamps outside the
/// series return the boundary price.
pub fn interpolate_price(pricing_data: &[PricePoint], timestamp: i64) -> Result<f64, PriceSeriesError> {
    let first = pricing_data.first().ok_or(PriceSeriesError::EmptySeries)?;
    let last = pricing_data.last().ok_or(PriceSeriesError::EmptySeries)?;

    if pricing_data.len() == 1 || timestamp <= first.timestamp {
        return Ok(first.price);
    }
    if timestamp >= last.timestamp {
        return Ok(last.price);
    }

    let step = pricing_data[1].timestamp - first.timestamp;
    if step <= 0 {
        return Ok(first.price);
    }

    let last_index = pricing_data.len() - 1;
    let previous_index = (((timestamp - first.timestamp) / step) as usize).min(last_index);
    let next_index = (previous_index + 1).min(last_index);

    let previous = pricing_data[previous_index];
    let next = pricing_data[next_index];

    let span = next.timestamp - previous.timestamp;
    if span <= 0 {
        return Ok(previous.price);
    }

    let direction = if previous.price > next.price { -1.0 } else { 1.0 };
    let offset = direction * VOLATILITY * (timestamp - previous.timestamp) as f64 / span as f64;

    Ok(previous.price + offset)
}

pub fn generate_random_pricepoint_range<R: Rng + ?Sized>(rng: &mut R) -> PricepointRange {
    let a = rng.gen_range(MIN_PRICE..=MAX_PRICE);
    let b = rng.gen_range(MIN_PRICE..=MAX_PRICE);

    PricepointRange {
        min: a.min(b),
        max: a.max(b),
    }
}
