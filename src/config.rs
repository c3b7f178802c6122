//! Seed configuration
//!
//! Everything a tool needs to know about the target network and database is
//! collected once into an immutable [`SeedConfig`] and passed by reference.

use alloy::primitives::{Address, U256};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::path::Path;
use std::str::FromStr;

use crate::cli::ConnectionArgs;
use crate::error::SeedError;
use crate::services::network::network_id;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "tomodex";
pub const DEFAULT_ADDRESS_BOOK: &str = "addresses.json";
pub const DEFAULT_EXCHANGE_ADDRESS: &str = "0xc1F424996039cc5B037dfB073bcd6e6915F0dfab";

pub const QUOTE_TOKENS: &[&str] = &["TOMO", "BTC", "ETH", "USDT"];

pub const SUPPORTED_PAIRS: &[&str] = &[
    "ETH/TOMO",
    "ETH/BTC",
    "BTC/USDT",
    "ETH/USDT",
    "TOMO/BTC",
    "TOMO/ETH",
];

/// Accounts used as order owners and trade counterparties.
pub const TRADER_ADDRESSES: &[&str] = &[
    "0x28074f8D0fD78629CD59290Cac185611a8d60109",
    "0x6e6BB166F420DDd682cAEbf55dAfBaFda74f2c9c",
    "0x53ee745b3d30d692dc016450fef68a898c16fa44",
    "0xe0a1240b358dfa6c167edea09c763ae9f3b51ea0",
];

const TESTNET_KEYS: &[&str] = &["0x463D27C152040C4E49C5D9606BF3A27E7CE00ACBA25FF4E6A42DD486C27443DA"];

const DEVELOPMENT_KEYS: &[&str] = &[
    "0x7f4c1bacba63f05827f6d8fc0e22cf68c42005775a7f73abff7d819986bae77c",
    "0x2c52197df32aa00940685ae94aeb4b8b6f4c81e2c5f9d289ec76eb614adb9686",
];

const DEFAULT_DECIMALS: u32 = 18;

/// Where to connect and which database to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub mongo_url: String,
    pub db_name: String,
}

impl DatabaseConfig {
    pub fn new(mongo_url: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            mongo_url: mongo_url.into(),
            db_name: db_name.into(),
        }
    }

    /// Database name comes from `DB_NAME`, falling back to `tomodex`.
    pub fn from_args(args: &ConnectionArgs) -> Self {
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());
        Self::new(args.mongo_url.clone(), db_name)
    }
}

/// Contract addresses per network ID, keyed by token symbol.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AddressBook(pub BTreeMap<String, BTreeMap<String, String>>);

impl AddressBook {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeedError::ConfigError(format!("Cannot read address book {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn for_network(&self, network_id: &str) -> Option<&BTreeMap<String, String>> {
        self.0.get(network_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub symbol: String,
    pub address: String,
    pub decimals: u32,
}

impl Default for NativeCurrency {
    fn default() -> Self {
        Self {
            symbol: "TOMO".to_string(),
            address: "0x0000000000000000000000000000000000000001".to_string(),
            decimals: 18,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database: DatabaseConfig,
    pub network: String,
    pub network_id: String,
    /// Token symbol -> contract address on `network_id`.
    pub contract_addresses: BTreeMap<String, String>,
    pub quote_tokens: Vec<String>,
    pub supported_pairs: Vec<String>,
    pub make_fees: HashMap<String, U256>,
    pub take_fees: HashMap<String, U256>,
    pub decimals: HashMap<String, u32>,
    pub native_currency: NativeCurrency,
    pub wallet_keys: Vec<String>,
    pub trader_addresses: Vec<String>,
    pub exchange_address: String,
    pub rpc_url: Option<String>,
}

impl SeedConfig {
    /// Builds the configuration for `network` from an already loaded address
    /// book. A network with no address book entry has no tokens.
    pub fn new(
        database: DatabaseConfig,
        network: &str,
        address_book: &AddressBook,
    ) -> Result<Self, SeedError> {
        let network_id = network_id(network)
            .ok_or_else(|| SeedError::UnknownNetwork(network.to_string()))?
            .to_string();

        let contract_addresses = match address_book.for_network(&network_id) {
            Some(addresses) => addresses.clone(),
            None => {
                tracing::warn!(network, network_id = %network_id, "No contract addresses for network");
                BTreeMap::new()
            }
        };

        // 10^18 / 250
        let fee = U256::from(10u64).pow(U256::from(18u64)) / U256::from(250u64);
        let make_fees = QUOTE_TOKENS.iter().map(|s| (s.to_string(), fee)).collect();
        let take_fees = QUOTE_TOKENS.iter().map(|s| (s.to_string(), fee)).collect();

        let decimals = [("TOMO", 18), ("BTC", 8), ("ETH", 18), ("USDT", 18)]
            .into_iter()
            .map(|(symbol, decimals)| (symbol.to_string(), decimals))
            .collect();

        Ok(Self {
            database,
            wallet_keys: wallet_keys_for(&network_id),
            network: network.to_string(),
            network_id,
            contract_addresses,
            quote_tokens: QUOTE_TOKENS.iter().map(|s| s.to_string()).collect(),
            supported_pairs: SUPPORTED_PAIRS.iter().map(|s| s.to_string()).collect(),
            make_fees,
            take_fees,
            decimals,
            native_currency: NativeCurrency::default(),
            trader_addresses: TRADER_ADDRESSES.iter().map(|s| s.to_string()).collect(),
            exchange_address: DEFAULT_EXCHANGE_ADDRESS.to_string(),
            rpc_url: None,
        })
    }

    /// Loads the address book from `TOKEN_ADDRESSES` (default
    /// `addresses.json`) and applies CLI/env overrides.
    pub fn from_args(args: &ConnectionArgs) -> Result<Self, SeedError> {
        let address_book_path =
            env::var("TOKEN_ADDRESSES").unwrap_or_else(|_| DEFAULT_ADDRESS_BOOK.to_string());
        tracing::debug!(path = %address_book_path, "Loading address book");
        let address_book = AddressBook::load(&address_book_path)?;

        let mut config = Self::new(DatabaseConfig::from_args(args), &args.network, &address_book)?;
        config.rpc_url = args.rpc_url.clone();
        if let Ok(exchange_address) = env::var("EXCHANGE_ADDRESS") {
            config.exchange_address = exchange_address;
        }

        Ok(config)
    }

    /// Symbols present in the address book for this network, sorted.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.contract_addresses.keys().map(String::as_str)
    }

    pub fn is_quote(&self, symbol: &str) -> bool {
        self.quote_tokens.iter().any(|q| q == symbol)
    }

    pub fn decimals_for(&self, symbol: &str) -> u32 {
        self.decimals.get(symbol).copied().unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn contract_address(&self, symbol: &str) -> Result<&str, SeedError> {
        self.contract_addresses
            .get(symbol)
            .map(String::as_str)
            .ok_or_else(|| SeedError::UnknownToken(symbol.to_string()))
    }
}

/// Mainnet and rinkeby keys come from the environment; test networks carry
/// fixed development keys.
fn wallet_keys_for(network_id: &str) -> Vec<String> {
    let from_env = |name: &str| -> Vec<String> {
        env::var(name)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    };

    match network_id {
        "1" => from_env("TOMO_MAINNET_KEYS"),
        "4" => from_env("TOMO_RINKEBY_KEYS"),
        "89" => TESTNET_KEYS.iter().map(|k| k.to_string()).collect(),
        "8888" => DEVELOPMENT_KEYS.iter().map(|k| k.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// EIP-55 checksummed form of `address`.
pub fn checksum_address(address: &str) -> Result<String, SeedError> {
    let parsed = Address::from_str(address)
        .map_err(|e| SeedError::InvalidAddress(format!("{}: {}", address, e)))?;
    Ok(parsed.to_checksum(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = r#"{
        "8888": {
            "BTC": "0x4f7a4e8f5d5d6a3c3f0e3b8b4c1f1f3d0b6c2a11",
            "ETH": "0x9a8531c62d02af08cf237eb8aecae9dbcb69b6fd",
            "USDT": "0xf069080f7acb9a6705b4a51f84d9adc67b921bdf"
        }
    }"#;

    fn test_config() -> SeedConfig {
        let book = AddressBook::from_json(BOOK).unwrap();
        SeedConfig::new(DatabaseConfig::new(DEFAULT_MONGO_URL, "test"), "development", &book).unwrap()
    }

    #[test]
    fn test_config_for_development() {
        let config = test_config();
        assert_eq!(config.network_id, "8888");
        assert_eq!(config.symbols().collect::<Vec<_>>(), vec!["BTC", "ETH", "USDT"]);
        assert_eq!(config.wallet_keys.len(), 2);
        assert_eq!(config.decimals_for("BTC"), 8);
        assert_eq!(config.decimals_for("ZRX"), 18);
        assert!(config.is_quote("USDT"));
        assert!(!config.is_quote("ZRX"));
    }

    #[test]
    fn test_quote_fees() {
        let config = test_config();
        let fee = config.make_fees.get("ETH").unwrap();
        assert_eq!(fee.to_string(), "4000000000000000");
        assert_eq!(config.take_fees.get("TOMO"), Some(fee));
    }

    #[test]
    fn test_unknown_network() {
        let book = AddressBook::default();
        let result = SeedConfig::new(DatabaseConfig::new(DEFAULT_MONGO_URL, "test"), "ropsten", &book);
        assert!(matches!(result, Err(SeedError::UnknownNetwork(_))));
    }

    #[test]
    fn test_network_without_addresses() {
        let book = AddressBook::from_json(BOOK).unwrap();
        let config =
            SeedConfig::new(DatabaseConfig::new(DEFAULT_MONGO_URL, "test"), "tomochainTestnet", &book).unwrap();
        assert_eq!(config.symbols().count(), 0);
        assert_eq!(config.wallet_keys.len(), 1);
    }

    #[test]
    fn test_contract_address_lookup() {
        let config = test_config();
        assert!(config.contract_address("ETH").is_ok());
        assert!(matches!(config.contract_address("TOMO"), Err(SeedError::UnknownToken(_))));
    }

    #[test]
    fn test_checksum_address() {
        assert_eq!(
            checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert!(checksum_address("0x1234").is_err());
    }
}
