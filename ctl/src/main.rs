use std::time::Duration;

use clap::{Parser, Subcommand};
use roster_db::storage::mongodb::{DEFAULT_CONNECT_TIMEOUT, MongoDBStorage};

use crate::commands::CreateUserParams;

mod commands;

#[derive(Parser)]
#[command(version, about = "Administrative tasks for the Roster user collection")]
pub struct Args {
    #[clap(subcommand)]
    command: Command,

    #[clap(
        short = 'D',
        long,
        env = "ROSTER_API_MONGODB_URI",
        default_value = "mongodb://localhost:27017/data"
    )]
    db_url: String,

    #[clap(
        long,
        env = "ROSTER_API_CONNECT_TIMEOUT_MS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT.as_millis() as u64
    )]
    connect_timeout_ms: u64,
}

#[derive(Clone, Subcommand)]
pub enum Command {
    /// Insert a user directly into the collection.
    #[command(name = "create-user")]
    CreateUser(CreateUserParams),

    /// Create the unique index on the users' email field.
    #[command(name = "ensure-indexes")]
    EnsureIndexes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let stg = MongoDBStorage::new(&args.db_url, Duration::from_millis(args.connect_timeout_ms))
        .await?;

    let result = match args.command {
        Command::CreateUser(params) => commands::create_user(&stg, params).await,
        Command::EnsureIndexes => commands::ensure_indexes(&stg).await,
    };

    stg.shutdown().await;
    result
}
