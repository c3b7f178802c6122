use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::services::collections;
use dex_seed::DatabaseConfig;

#[derive(Parser)]
#[command(name = "drop_collection", about = "Drop one collection")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[arg(long)]
    collection: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let database = DatabaseConfig::from_args(&args.connection);
    let collection = args.collection.as_str();

    println!("Dropping {} collection", collection);
    with_database(&database, |db| async move {
        collections::drop_collection(&db, collection).await
    })
    .await?;

    Ok(())
}
