//! Seeds the cafe MongoDB database with example feedback and order history.
//!
//! Run with:
//! ```
//! cargo run -p cafe-seed --bin seed
//! ```
//!
//! `MONGODB_URI` and `MONGODB_DATABASE` override the default connection
//! target. Logs go to stderr; stdout only carries the completion line.

use cafe_seed::prelude::*;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::from_env();
    tracing::info!("Seeding database {}", config.database);

    let seeder = Seeder::connect(&config).await?;
    let summary = seeder.run(OffsetDateTime::now_utc()).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Feedback: {}", summary.feedback);
    tracing::info!("  Order history: {}", summary.order_history);

    println!("{SUCCESS_MESSAGE}");

    Ok(())
}
