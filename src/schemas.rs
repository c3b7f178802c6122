//! `$jsonSchema` validators for the seeded collections.

use mongodb::bson::{Document, doc};

pub const ACCOUNTS: &str = "accounts";
pub const ASSOCIATIONS: &str = "associations";
pub const CONFIG: &str = "config";
pub const ORDERS: &str = "orders";
pub const PAIRS: &str = "pairs";
pub const TOKENS: &str = "tokens";
pub const TRADES: &str = "trades";
pub const WALLETS: &str = "wallets";

/// Creation order used when building a fresh database.
pub const ALL_COLLECTIONS: &[&str] = &[
    TOKENS,
    PAIRS,
    WALLETS,
    ACCOUNTS,
    CONFIG,
    ASSOCIATIONS,
    ORDERS,
    TRADES,
];

pub fn is_known_collection(name: &str) -> bool {
    ALL_COLLECTIONS.contains(&name)
}

/// Validator document for `collection`, if it has one. `associations` is
/// only constrained by its unique index.
pub fn validator_for(collection: &str) -> Option<Document> {
    let schema = match collection {
        TOKENS => tokens_schema(),
        PAIRS => pairs_schema(),
        ORDERS => orders_schema(),
        TRADES => trades_schema(),
        ACCOUNTS => accounts_schema(),
        WALLETS => wallets_schema(),
        CONFIG => config_schema(),
        _ => return None,
    };

    Some(doc! { "$jsonSchema": schema })
}

/// Fields that must be unique, per collection.
pub fn unique_index_for(collection: &str) -> Option<Document> {
    match collection {
        CONFIG => Some(doc! { "key": 1 }),
        ASSOCIATIONS => Some(doc! { "chain": 1, "address": 1 }),
        _ => None,
    }
}

fn string() -> Document {
    doc! { "bsonType": "string" }
}

fn date() -> Document {
    doc! { "bsonType": "date" }
}

fn tokens_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": ["symbol", "contractAddress", "decimals"],
        "properties": {
            "symbol": { "bsonType": "string", "description": "must be a string and is required" },
            "contractAddress": string(),
            "quote": { "bsonType": "bool" },
            "decimals": { "bsonType": "int" },
            "makeFee": string(),
            "takeFee": string(),
            "usd": string(),
            "createdAt": date(),
            "updatedAt": date(),
        }
    }
}

fn pairs_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": ["baseTokenAddress", "quoteTokenAddress"],
        "properties": {
            "baseTokenSymbol": string(),
            "baseTokenAddress": { "bsonType": "string", "description": "must be a string and is required" },
            "baseTokenDecimals": { "bsonType": "int" },
            "quoteTokenSymbol": string(),
            "quoteTokenAddress": { "bsonType": "string", "description": "must be a string and is required" },
            "quoteTokenDecimals": { "bsonType": "int" },
            "priceMultiplier": string(),
            "active": { "bsonType": "bool" },
            "makeFee": string(),
            "takeFee": string(),
            "createdAt": date(),
            "updatedAt": date(),
        }
    }
}

fn orders_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": [
            "baseToken",
            "quoteToken",
            "amount",
            "pricepoint",
            "userAddress",
            "exchangeAddress",
            "filledAmount",
        ],
        "properties": {
            "baseToken": string(),
            "quoteToken": string(),
            "filledAmount": string(),
            "amount": string(),
            "pricepoint": string(),
            "makeFee": string(),
            "takeFee": string(),
            "side": string(),
            "status": string(),
            "exchangeAddress": string(),
            "userAddress": string(),
            "signature": { "bsonType": "object" },
            "nonce": string(),
            "pairName": string(),
            "hash": string(),
            "createdAt": date(),
            "updatedAt": date(),
        }
    }
}

fn trades_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": ["baseToken", "quoteToken", "amount", "maker", "taker"],
        "properties": {
            "amount": string(),
            "pricepoint": string(),
            "status": string(),
            "side": string(),
            "maker": string(),
            "taker": string(),
            "takerOrderHash": string(),
            "makerOrderHash": string(),
            "hash": string(),
            "txHash": string(),
            "pairName": string(),
            "baseToken": string(),
            "quoteToken": string(),
            "createdAt": date(),
            "updatedAt": date(),
        }
    }
}

fn accounts_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": ["address"],
        "properties": {
            "address": string(),
            "tokenBalances": { "bsonType": "object" },
            "isBlocked": { "bsonType": "bool" },
        }
    }
}

fn wallets_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": ["address", "privateKey"],
        "properties": {
            "address": string(),
            "privateKey": string(),
            "admin": { "bsonType": "bool" },
            "operator": { "bsonType": "bool" },
        }
    }
}

fn config_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": ["key"],
        "properties": {
            "key": string(),
            "value": {
                "bsonType": ["int", "long", "string", "array", "bool", "date", "object"]
            },
            "createdAt": date(),
            "updatedAt": date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_collection_but_associations_has_validator() {
        for name in ALL_COLLECTIONS {
            assert_eq!(validator_for(name).is_some(), *name != ASSOCIATIONS, "{}", name);
        }
        assert!(validator_for("balances").is_none());
    }

    #[test]
    fn test_orders_required_fields() {
        let validator = validator_for(ORDERS).unwrap();
        let schema = validator.get_document("$jsonSchema").unwrap();
        let required = schema.get_array("required").unwrap();
        assert_eq!(required.len(), 7);
        assert!(required.iter().any(|f| f.as_str() == Some("filledAmount")));

        let properties = schema.get_document("properties").unwrap();
        assert_eq!(
            properties.get_document("amount").unwrap().get_str("bsonType").unwrap(),
            "string"
        );
    }

    #[test]
    fn test_unique_indexes() {
        assert_eq!(unique_index_for(CONFIG), Some(doc! { "key": 1 }));
        assert_eq!(unique_index_for(ASSOCIATIONS), Some(doc! { "chain": 1, "address": 1 }));
        assert_eq!(unique_index_for(TOKENS), None);
    }

    #[test]
    fn test_known_collections() {
        assert!(is_known_collection("trades"));
        assert!(!is_known_collection("balances"));
    }
}
