use crate::services::price_series::PriceSeriesError;

/// Error types shared by the seed tools
#[derive(Debug)]
pub enum SeedError {
    DatabaseError(String),
    ConfigError(String),
    UnknownNetwork(String),
    UnknownToken(String),
    UnknownCollection(String),
    InvalidAddress(String),
    InvalidKey(String),
    ProviderError(String),
    PriceSeries(PriceSeriesError),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            SeedError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            SeedError::UnknownNetwork(name) => write!(f, "Unknown network: {}", name),
            SeedError::UnknownToken(symbol) => write!(f, "Unknown token: {}", symbol),
            SeedError::UnknownCollection(name) => write!(f, "Unknown collection: {}", name),
            SeedError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            SeedError::InvalidKey(msg) => write!(f, "Invalid private key: {}", msg),
            SeedError::ProviderError(msg) => write!(f, "Provider error: {}", msg),
            SeedError::PriceSeries(e) => write!(f, "Price series error: {}", e),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<mongodb::error::Error> for SeedError {
    fn from(e: mongodb::error::Error) -> Self {
        SeedError::DatabaseError(e.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for SeedError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        SeedError::DatabaseError(format!("BSON encoding failed: {}", e))
    }
}

impl From<mongodb::bson::de::Error> for SeedError {
    fn from(e: mongodb::bson::de::Error) -> Self {
        SeedError::DatabaseError(format!("BSON decoding failed: {}", e))
    }
}

impl From<std::io::Error> for SeedError {
    fn from(e: std::io::Error) -> Self {
        SeedError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(e: serde_json::Error) -> Self {
        SeedError::ConfigError(format!("Invalid JSON: {}", e))
    }
}

impl From<PriceSeriesError> for SeedError {
    fn from(e: PriceSeriesError) -> Self {
        SeedError::PriceSeries(e)
    }
}
