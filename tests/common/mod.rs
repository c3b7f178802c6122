use dex_seed::config::{AddressBook, DatabaseConfig, SeedConfig};
use std::env;

pub const ADDRESS_BOOK: &str = r#"{
    "8888": {
        "BTC": "0x4f7a4e8f5d5d6a3c3f0e3b8b4c1f1f3d0b6c2a11",
        "ETH": "0x9a8531c62d02af08cf237eb8aecae9dbcb69b6fd",
        "USDT": "0xf069080f7acb9a6705b4a51f84d9adc67b921bdf"
    }
}"#;

/// Uses TEST_MONGO_URL or falls back to a local server. Each call gets its
/// own database name so tests can run side by side.
pub fn test_database_config(suffix: &str) -> DatabaseConfig {
    let mongo_url =
        env::var("TEST_MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    DatabaseConfig::new(mongo_url, format!("dex_seed_test_{}", suffix))
}

/// Development network config over [`ADDRESS_BOOK`].
#[allow(dead_code)]
pub fn test_seed_config(suffix: &str) -> SeedConfig {
    let book = AddressBook::from_json(ADDRESS_BOOK).expect("Test address book should parse");
    SeedConfig::new(test_database_config(suffix), "development", &book)
        .expect("Development network should be known")
}
