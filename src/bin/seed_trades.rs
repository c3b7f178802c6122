// src/bin/seed_trades.rs

use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::trades::{self, DEFAULT_QUOTE, DEFAULT_TRADE_COUNT};
use dex_seed::SeedConfig;

#[derive(Parser)]
#[command(name = "seed_trades", about = "Seed synthetic trades priced from a random-walk series")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Trades to insert per pair
    #[arg(long, default_value_t = DEFAULT_TRADE_COUNT)]
    number: usize,

    /// Quote token symbol selecting the pairs
    #[arg(long, default_value = DEFAULT_QUOTE)]
    quote: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let config = SeedConfig::from_args(&args.connection)?;
    let config = &config;
    let (quote, number) = (args.quote.as_str(), args.number);

    let inserted = with_database(&config.database, |db| async move {
        trades::seed_trades(&db, config, quote, number).await
    })
    .await?;

    println!("Inserted {} trades quoted in {}", inserted, quote);
    Ok(())
}
