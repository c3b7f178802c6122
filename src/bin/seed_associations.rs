use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::seeders::associations;
use dex_seed::DatabaseConfig;

#[derive(Parser)]
#[command(name = "seed_associations", about = "Create the associations collection and its fixed rows")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let database = DatabaseConfig::from_args(&args.connection);

    let inserted = with_database(&database, |db| async move {
        associations::seed_associations(&db).await
    })
    .await?;

    println!("Inserted {} association(s)", inserted);
    Ok(())
}
