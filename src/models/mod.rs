//! Documents stored by the seed tools. Field names follow the camelCase
//! layout the collection validators expect.

pub mod account;
pub mod association;
pub mod config_entry;
pub mod order;
pub mod pair;
pub mod token;
pub mod trade;
pub mod wallet;

pub use account::{Account, TokenBalance};
pub use association::Association;
pub use config_entry::ConfigEntry;
pub use order::Order;
pub use pair::Pair;
pub use token::Token;
pub use trade::Trade;
pub use wallet::Wallet;

use chrono::{DateTime, Utc};

/// BSON date from a chrono timestamp (millisecond precision).
pub fn bson_date(dt: DateTime<Utc>) -> mongodb::bson::DateTime {
    mongodb::bson::DateTime::from_millis(dt.timestamp_millis())
}
