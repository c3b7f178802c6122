mod common;

use rand::{SeedableRng, rngs::StdRng};

use dex_seed::SeedError;
use dex_seed::seeders::{accounts, orders, pairs, tokens, trades, wallets};
use dex_seed::services::price_series::{PricingOptions, generate_pricing_data};
use dex_seed::services::synthetic::{ORDER_STATUSES, TRADE_STATUSES};

use crate::common::test_seed_config;

#[test]
fn test_tokens_include_native_currency() {
    let config = test_seed_config("tokens");
    let mut rng = StdRng::seed_from_u64(1);

    let documents = tokens::build_token_documents(&config, &mut rng).unwrap();
    let symbols: Vec<&str> = documents.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["BTC", "ETH", "USDT", "TOMO"]);

    let tomo = documents.iter().find(|t| t.symbol == "TOMO").unwrap();
    assert_eq!(tomo.contract_address, "0x0000000000000000000000000000000000000001");
    assert!(tomo.quote);
    assert_eq!(tomo.make_fee.as_deref(), Some("4000000000000000"));

    let btc = documents.iter().find(|t| t.symbol == "BTC").unwrap();
    assert_eq!(btc.decimals, 8);
    assert!(btc.created_at.is_some());
}

#[test]
fn test_token_addresses_are_checksummed() {
    let config = test_seed_config("checksum");
    let mut rng = StdRng::seed_from_u64(2);

    for token in tokens::build_token_documents(&config, &mut rng).unwrap() {
        assert!(token.contract_address.starts_with("0x"));
        assert_eq!(token.contract_address.len(), 42);
        assert_ne!(
            token.contract_address[2..].to_lowercase(),
            token.contract_address[2..],
            "{} should carry upper-case checksum letters",
            token.symbol
        );
    }
}

#[test]
fn test_pairs_from_seeded_tokens() {
    let config = test_seed_config("pairs");
    let mut rng = StdRng::seed_from_u64(3);
    let token_documents = tokens::build_token_documents(&config, &mut rng).unwrap();

    let documents = pairs::build_pair_documents(&config, &token_documents, &mut rng).unwrap();
    assert_eq!(documents.len(), config.supported_pairs.len());

    let eth_btc = documents.iter().find(|p| p.name() == "ETH/BTC").unwrap();
    assert_eq!(eth_btc.base_token_decimals, 18);
    assert_eq!(eth_btc.quote_token_decimals, 8);
    assert_eq!(eth_btc.price_multiplier, "10000000000000000000");
    assert!(eth_btc.active);

    let eth_tomo = documents.iter().find(|p| p.name() == "ETH/TOMO").unwrap();
    assert_eq!(eth_tomo.price_multiplier, "1000000000");
    assert_eq!(eth_tomo.make_fee.as_deref(), Some("4000000000000000"));
}

#[test]
fn test_pairs_with_missing_token() {
    let config = test_seed_config("missing");
    let mut rng = StdRng::seed_from_u64(4);
    let mut token_documents = tokens::build_token_documents(&config, &mut rng).unwrap();
    token_documents.retain(|t| t.symbol != "USDT");

    let result = pairs::build_pair_documents(&config, &token_documents, &mut rng);
    assert!(matches!(result, Err(SeedError::UnknownToken(symbol)) if symbol == "USDT"));
}

#[test]
fn test_wallets_and_accounts_share_addresses() {
    let config = test_seed_config("wallets");

    let wallet_documents = wallets::build_wallet_documents(&config).unwrap();
    let account_documents = accounts::build_account_documents(&config).unwrap();
    assert_eq!(wallet_documents.len(), config.wallet_keys.len());
    assert_eq!(account_documents.len(), wallet_documents.len());

    for (wallet, account) in wallet_documents.iter().zip(&account_documents) {
        assert_eq!(wallet.address, account.address);
        assert!(wallet.admin && wallet.operator);
        assert!(!wallet.private_key.starts_with("0x"));
        assert!(!account.is_blocked);
        assert_eq!(account.token_balances.len(), 3);

        for (address, balance) in &account.token_balances {
            assert_eq!(address, &balance.address);
            assert_eq!(balance.balance, accounts::INITIAL_BALANCE);
            assert_eq!(balance.allowance, accounts::INITIAL_BALANCE);
            assert_eq!(balance.locked_balance, "0");
        }
    }
}

#[test]
fn test_orders_across_pairs() {
    let config = test_seed_config("orders");
    let mut rng = StdRng::seed_from_u64(5);
    let token_documents = tokens::build_token_documents(&config, &mut rng).unwrap();
    let pair_documents = pairs::build_pair_documents(&config, &token_documents, &mut rng).unwrap();

    let documents = orders::build_order_documents(&config, &pair_documents, 500, &mut rng).unwrap();
    assert_eq!(documents.len(), 500);

    for order in &documents {
        assert!(pair_documents.iter().any(|p| p.name() == order.pair_name));
        assert!(ORDER_STATUSES.iter().any(|(status, _)| *status == order.status));
        assert!(order.side == "BUY" || order.side == "SELL");
        assert_eq!(order.hash.len(), 66);

        let pricepoint: i64 = order.pricepoint.parse().unwrap();
        assert!((999_000..=1_000_000).contains(&pricepoint));
    }
}

#[test]
fn test_trades_follow_price_series() {
    let config = test_seed_config("trades");
    let mut rng = StdRng::seed_from_u64(6);
    let token_documents = tokens::build_token_documents(&config, &mut rng).unwrap();
    let pair_documents = pairs::build_pair_documents(&config, &token_documents, &mut rng).unwrap();
    let pair = pair_documents.iter().find(|p| p.name() == "ETH/USDT").unwrap();

    let window = trades::trade_window();
    let pricing_data = generate_pricing_data(
        &mut rng,
        PricingOptions {
            start: Some(window.0.timestamp_millis()),
            end: Some(window.1.timestamp_millis()),
            initial_price: Some(1_000_000.0),
            ..Default::default()
        },
    )
    .unwrap();

    let documents =
        trades::build_trade_documents(&config, pair, &pricing_data, window, 200, &mut rng).unwrap();
    assert_eq!(documents.len(), 200);

    let lowest = pricing_data.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let highest = pricing_data.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);

    for trade in &documents {
        assert_ne!(trade.maker, trade.taker);
        assert_eq!(trade.pair_name, "ETH/USDT");
        assert!(TRADE_STATUSES.iter().any(|(status, _)| *status == trade.status));

        let pricepoint = trade.pricepoint.parse::<i64>().unwrap() as f64;
        assert!(pricepoint >= (lowest - 1.0).floor());
        assert!(pricepoint <= (highest * 1.05).ceil());

        let created_at = trade.created_at.timestamp_millis();
        assert!(created_at >= window.0.timestamp_millis());
        assert!(created_at <= window.1.timestamp_millis());
    }
}

#[test]
fn test_default_trade_quote_has_pairs() {
    let config = test_seed_config("default_quote");
    let mut rng = StdRng::seed_from_u64(7);
    let token_documents = tokens::build_token_documents(&config, &mut rng).unwrap();
    let pair_documents = pairs::build_pair_documents(&config, &token_documents, &mut rng).unwrap();

    assert!(config.is_quote(trades::DEFAULT_QUOTE));
    assert!(
        pair_documents
            .iter()
            .any(|p| p.quote_token_symbol == trades::DEFAULT_QUOTE),
        "no pair is quoted in {}",
        trades::DEFAULT_QUOTE
    );
}
