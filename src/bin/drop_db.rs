use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::services::collections;
use dex_seed::DatabaseConfig;

#[derive(Parser)]
#[command(name = "drop_db", about = "Drop the whole seed database")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let database = DatabaseConfig::from_args(&args.connection);

    with_database(&database, |db| async move { collections::drop_database(&db).await }).await?;

    println!("Dropped database {}", database.db_name);
    Ok(())
}
