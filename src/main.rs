use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::reset_database;
use dex_seed::SeedConfig;

/// Drops the target database and rebuilds it with reference data.
#[derive(Parser)]
#[command(name = "dex-seed", version, about)]
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
    tracing::info!(
        network = %config.network,
        network_id = %config.network_id,
        db = %config.database.db_name,
        "Resetting database"
    );

    let summary = with_database(&config.database, |db| async move {
        reset_database(&db, config).await
    })
    .await?;

    println!("Collections created: {}", summary.collections_created);
    println!("Tokens:              {}", summary.tokens);
    println!("Pairs:               {}", summary.pairs);
    println!("Wallets:             {}", summary.wallets);
    println!("Accounts:            {}", summary.accounts);
    println!("Config entries:      {}", summary.config_entries);
    println!("Associations:        {}", summary.associations);

    Ok(())
}
