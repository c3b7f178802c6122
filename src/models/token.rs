use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Token {
    pub symbol: String,
    pub contract_address: String,
    pub decimals: i32,
    pub quote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}
