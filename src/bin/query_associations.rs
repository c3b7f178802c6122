use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::associations::{DEFAULT_ADDRESS, DEFAULT_CHAIN};
use dex_seed::seeders::queries;
use dex_seed::services::collections::to_json;
use dex_seed::DatabaseConfig;

#[derive(Parser)]
#[command(name = "query_associations", about = "Print associations for a chain address")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[arg(long, default_value = DEFAULT_CHAIN)]
    chain: String,

    #[arg(long, default_value = DEFAULT_ADDRESS)]
    address: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let database = DatabaseConfig::from_args(&args.connection);
    let (chain, address) = (args.chain.as_str(), args.address.as_str());

    let rows = with_database(&database, |db| async move {
        queries::associations(&db, chain, address).await
    })
    .await?;

    for row in rows {
        println!("{}", serde_json::to_string_pretty(&to_json(row))?);
    }

    Ok(())
}
