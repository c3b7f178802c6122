//! Read-only inspection queries.

use mongodb::{
    Database,
    bson::{Document, doc},
};

use crate::error::SeedError;
use crate::models::Pair;
use crate::schemas::{ASSOCIATIONS, ORDERS, PAIRS};
use crate::services::collections::find_documents;

/// Statuses of orders still resting on the book.
pub const OPEN_STATUSES: &[&str] = &["OPEN", "PARTIALLY_FILLED"];

pub fn raw_orderbook_filter(pair: &Pair) -> Document {
    doc! {
        "status": { "$in": OPEN_STATUSES.to_vec() },
        "baseToken": pair.base_token_address.as_str(),
        "quoteToken": pair.quote_token_address.as_str(),
    }
}

/// Open and partially filled orders of the first stored pair.
pub async fn raw_orderbook(db: &Database) -> Result<Vec<Document>, SeedError> {
    let pair = db
        .collection::<Pair>(PAIRS)
        .find_one(doc! {})
        .await?
        .ok_or_else(|| SeedError::DatabaseError("No pairs in database".to_string()))?;

    tracing::info!(pair = %pair.name(), "Querying raw order book");
    find_documents(db, ORDERS, raw_orderbook_filter(&pair)).await
}

pub async fn associations(db: &Database, chain: &str, address: &str) -> Result<Vec<Document>, SeedError> {
    find_documents(db, ASSOCIATIONS, doc! { "chain": chain, "address": address }).await
}
