use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::config_entries;
use dex_seed::SeedConfig;

#[derive(Parser)]
#[command(name = "seed_config", about = "Seed the config collection")]
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
        config_entries::seed_config(&db, config).await
    })
    .await?;

    println!("Inserted {} config entries", inserted);
    Ok(())
}
