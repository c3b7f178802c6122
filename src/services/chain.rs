//! Blockchain-side helpers: key-derived addresses and the latest block.

use alloy::{
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

use crate::error::SeedError;

/// Address and normalized key for a wallet private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIdentity {
    /// EIP-55 checksummed
    pub address: String,
    /// Lowercase hex without `0x`
    pub private_key: String,
}

pub fn identity_from_key(key: &str) -> Result<KeyIdentity, SeedError> {
    let key = key.trim();
    let signer: PrivateKeySigner = key
        .parse()
        .map_err(|e| SeedError::InvalidKey(format!("{}", e)))?;

    let private_key = key
        .strip_prefix("0x")
        .or_else(|| key.strip_prefix("0X"))
        .unwrap_or(key)
        .to_lowercase();

    Ok(KeyIdentity {
        address: signer.address().to_checksum(None),
        private_key,
    })
}

/// Latest block number from an Ethereum JSON-RPC endpoint.
pub async fn latest_block_number(rpc_url: &str) -> Result<u64, SeedError> {
    let provider = ProviderBuilder::new().on_http(
        rpc_url
            .parse()
            .map_err(|e| SeedError::ProviderError(format!("Invalid RPC URL: {}", e)))?,
    );

    let block_number = provider.get_block_number().await.map_err(|e| {
        tracing::error!(rpc_url, error = %e, "Failed to read block number");
        SeedError::ProviderError(format!("get_block_number failed: {}", e))
    })?;

    tracing::info!(rpc_url, block_number, "Fetched latest block number");
    Ok(block_number)
}
