use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pair {
    pub base_token_symbol: String,
    pub base_token_address: String,
    pub base_token_decimals: i32,
    pub quote_token_symbol: String,
    pub quote_token_address: String,
    pub quote_token_decimals: i32,
    /// Decimal string of a 256-bit integer
    pub price_multiplier: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

impl Pair {
    /// `BASE/QUOTE`
    pub fn name(&self) -> String {
        format!("{}/{}", self.base_token_symbol, self.quote_token_symbol)
    }
}
