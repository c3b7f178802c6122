use alloy::primitives::U256;

/// Base pricepoint scale shared by every pair.
pub const DEFAULT_PRICEPOINT_MULTIPLIER: u64 = 1_000_000_000;

/// Pricepoint multiplier for a pair: `1e9 * 10^|base - quote|`.
pub fn price_multiplier(base_token_decimals: u32, quote_token_decimals: u32) -> U256 {
    let decimals_diff = base_token_decimals.abs_diff(quote_token_decimals);

    U256::from(DEFAULT_PRICEPOINT_MULTIPLIER) * U256::from(10u64).pow(U256::from(decimals_diff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_decimals() {
        assert_eq!(price_multiplier(18, 18), U256::from(1_000_000_000u64));
    }

    #[test]
    fn test_decimals_difference_is_symmetric() {
        let expected = U256::from(10u64).pow(U256::from(19u64));
        assert_eq!(price_multiplier(18, 8), expected);
        assert_eq!(price_multiplier(8, 18), expected);
        assert_eq!(price_multiplier(18, 8).to_string(), "10000000000000000000");
    }
}
