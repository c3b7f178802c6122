// src/bin/seed_pairs.rs
//
// Run after seed_tokens: pairs are resolved against the stored tokens.

use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::pairs;
use dex_seed::SeedConfig;

#[derive(Parser)]
#[command(name = "seed_pairs", about = "Seed the supported trading pairs")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let config = SeedConfig::from_args(&args.connection)?;
    let config = &config;

    let inserted = with_database(&config.database, |db| async move {
        pairs::seed_pairs(&db, config).await
    })
    .await?;

    println!("Inserted {} pairs", inserted);
    Ok(())
}
