//! Flags shared by every tool, plus logging bootstrap.

use clap::Args;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_MONGO_URL;

#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// MongoDB connection URL
    #[arg(long = "mongo_url", env = "MONGO_URL", default_value = DEFAULT_MONGO_URL)]
    pub mongo_url: String,

    /// Network name (development, tomochainTestnet, tomochain, rinkeby, ethereum)
    #[arg(long, env = "NETWORK", default_value = "development")]
    pub network: String,

    /// Ethereum JSON-RPC endpoint, used to read the latest block number
    #[arg(long = "rpc_url", env = "ETHEREUM_RPC_URL")]
    pub rpc_url: Option<String>,
}

/// Loads `.env` and installs the fmt subscriber (`RUST_LOG` overrides the
/// default filter).
pub fn init() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dex_seed=debug,mongodb=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
