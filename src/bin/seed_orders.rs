// src/bin/seed_orders.rs

use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::orders::{self, DEFAULT_ORDER_COUNT};
use dex_seed::SeedConfig;

#[derive(Parser)]
#[command(name = "seed_orders", about = "Seed synthetic orders across the stored pairs")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Number of orders to insert
    #[arg(long, default_value_t = DEFAULT_ORDER_COUNT)]
    number: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let config = SeedConfig::from_args(&args.connection)?;
    let config = &config;
    let number = args.number;

    let inserted = with_database(&config.database, |db| async move {
        orders::seed_orders(&db, config, number).await
    })
    .await?;

    println!("Inserted {} orders", inserted);
    Ok(())
}
