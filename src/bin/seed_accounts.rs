use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::accounts;
use dex_seed::SeedConfig;

#[derive(Parser)]
#[command(name = "seed_accounts", about = "Seed funded accounts for the network keys")]
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
        accounts::seed_accounts(&db, config).await
    })
    .await?;

    println!("Inserted {} accounts document(s)", inserted);
    Ok(())
}
