use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub address: String,
    /// Hex without the `0x` prefix
    pub private_key: String,
    pub admin: bool,
    pub operator: bool,
}
