use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::services::collections;
use dex_seed::DatabaseConfig;

#[derive(Parser)]
#[command(name = "create_collection", about = "Create collections with their schema validators")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Collection to create; every known collection when omitted
    #[arg(long)]
    collection: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let database = DatabaseConfig::from_args(&args.connection);
    let collection = args.collection.as_deref();

    let created = with_database(&database, |db| async move {
        match collection {
            Some(name) => Ok(usize::from(collections::create_collection(&db, name).await?)),
            None => collections::create_all_collections(&db).await,
        }
    })
    .await?;

    println!("Created {} collection(s) in {}", created, database.db_name);
    Ok(())
}
