// src/bin/create_user.rs

use clap::Parser;

use dex_seed::cli::{self, ConnectionArgs};
use dex_seed::db::with_database;
use dex_seed::services::collections;
use dex_seed::DatabaseConfig;

#[derive(Parser)]
#[command(name = "create_user", about = "Create a database user with userAdminAnyDatabase")]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[arg(long)]
    user: String,

    #[arg(long, env = "MONGO_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::init();
    let args = Args::parse();
    let database = DatabaseConfig::from_args(&args.connection);
    let (user, password) = (args.user.as_str(), args.password.as_str());

    with_database(&database, |db| async move {
        collections::create_user(&db, user, password).await
    })
    .await?;

    println!("User created");
    Ok(())
}
