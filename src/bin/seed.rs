use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use travelstay::seed::{self, SeedOptions};

/// Seed the database with a large number of sample listings using batch
/// processing.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The total number of listings to create.
    #[arg(long, default_value_t = 50_000)]
    number: u32,

    /// The number of listings to create in each batch.
    #[arg(long = "batch-size", default_value_t = 10_000, value_parser = clap::value_parser!(u32).range(1..))]
    batch_size: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "travelstay=info,sqlx=warn".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("connect to database")?;

    seed::run(
        &db,
        &SeedOptions {
            number: args.number,
            batch_size: args.batch_size,
        },
    )
    .await?;

    Ok(())
}
