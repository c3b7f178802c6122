use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::queries;
use dex_seed::services::collections::to_json;
use dex_seed::DatabaseConfig;

#[derive(Parser)]
#[command(name = "query_raw_orderbook", about = "Print open orders of the first pair")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let database = DatabaseConfig::from_args(&args.connection);

    let orders = with_database(&database, |db| async move { queries::raw_orderbook(&db).await }).await?;

    println!("Found {} open orders", orders.len());
    for order in orders {
        println!("{}", serde_json::to_string_pretty(&to_json(order))?);
    }

    Ok(())
}
