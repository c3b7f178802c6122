/// Chain ID (as used in the address book keys) for a network name.
///
/// Both the deployment names (`development`, `tomochainTestnet`, ...) and the
/// older aliases (`local`, `homestead`, `mainnet`) resolve.
pub fn network_id(network: &str) -> Option<&'static str> {
    match network {
        "ethereum" | "mainnet" | "homestead" => Some("1"),
        "rinkeby" => Some("4"),
        "tomochain" => Some("88"),
        "tomochainTestnet" => Some("89"),
        "development" | "local" => Some("8888"),
        _ => None,
    }
}
