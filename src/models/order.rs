use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Amounts, fees and pricepoints are decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub exchange_address: String,
    pub user_address: String,
    pub base_token: String,
    pub quote_token: String,
    pub pair_name: String,
    pub hash: String,
    pub side: String,
    pub status: String,
    pub make_fee: String,
    pub take_fee: String,
    pub amount: String,
    pub pricepoint: String,
    pub filled_amount: String,
    pub created_at: DateTime,
}
