use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub taker: String,
    pub maker: String,
    pub hash: String,
    pub base_token: String,
    pub quote_token: String,
    pub maker_order_hash: String,
    pub taker_order_hash: String,
    pub tx_hash: String,
    pub status: String,
    pub pair_name: String,
    pub pricepoint: String,
    pub side: String,
    pub amount: String,
    pub created_at: DateTime,
}
