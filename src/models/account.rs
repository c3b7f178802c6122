use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub address: String,
    pub symbol: String,
    pub balance: String,
    pub allowance: String,
    pub locked_balance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    pub is_blocked: bool,
    /// Keyed by checksummed token contract address
    pub token_balances: BTreeMap<String, TokenBalance>,
}
