//! Database seeding utilities.

use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::config::SeedConfig;
use crate::fixtures;
use crate::models::{Feedback, OrderHistory};

/// Collection holding customer reviews.
pub const FEEDBACK_COLLECTION: &str = "feedback";

/// Collection holding order lifecycle records.
pub const ORDER_HISTORY_COLLECTION: &str = "order_history";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Number of documents inserted by a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub feedback: usize,
    pub order_history: usize,
}

/// Document counts currently stored in the seeded collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionCounts {
    pub feedback: u64,
    pub order_history: u64,
}

/// Writes the fixture documents into a MongoDB database.
pub struct Seeder {
    db: Database,
}

impl Seeder {
    /// Opens a client for `config.uri`, pings the server and selects
    /// `config.database` on it.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let client = Client::with_uri_str(&config.uri).await?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Connected to MongoDB");
        Ok(Self::new(&client, &config.database))
    }

    /// Selects `database` on an existing client without opening a new
    /// connection.
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            db: client.database(database),
        }
    }

    /// The database this seeder writes to.
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn feedback(&self) -> Collection<Feedback> {
        self.db.collection(FEEDBACK_COLLECTION)
    }

    fn order_history(&self) -> Collection<OrderHistory> {
        self.db.collection(ORDER_HISTORY_COLLECTION)
    }

    /// Seeds the feedback fixtures, then the order history fixture.
    ///
    /// Nothing is checked before writing: a second run inserts a second copy
    /// of every document with fresh ids and timestamps.
    pub async fn run(&self, now: OffsetDateTime) -> Result<SeedSummary, SeedError> {
        let feedback = self.seed_feedback(&fixtures::feedback(now)).await?;
        let order_history = self
            .seed_order_history(&fixtures::order_history(now))
            .await?;

        Ok(SeedSummary {
            feedback,
            order_history,
        })
    }

    /// Inserts feedback records in a single `insertMany`.
    pub async fn seed_feedback(&self, feedback: &[Feedback]) -> Result<usize, SeedError> {
        info!("Seeding {} feedback records...", feedback.len());

        let result = self.feedback().insert_many(feedback).await?;

        info!("Seeded {} feedback records", result.inserted_ids.len());
        Ok(result.inserted_ids.len())
    }

    /// Inserts one order history record.
    pub async fn seed_order_history(&self, history: &OrderHistory) -> Result<usize, SeedError> {
        info!(
            "Seeding order history for order {} ({} status changes)...",
            history.order_id,
            history.status_changes.len()
        );

        let result = self.order_history().insert_one(history).await?;

        info!("Seeded order history {}", result.inserted_id);
        Ok(1)
    }

    /// Counts the documents currently stored in both collections.
    pub async fn collection_counts(&self) -> Result<CollectionCounts, SeedError> {
        let all = Document::new();

        Ok(CollectionCounts {
            feedback: self.feedback().count_documents(all.clone()).await?,
            order_history: self.order_history().count_documents(all).await?,
        })
    }
}
