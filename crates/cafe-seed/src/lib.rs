//! Seed data loader for the cafe MongoDB database.
//!
//! This crate writes a fixed set of example documents: two customer feedback
//! records and one order status-history record. It is meant to run once while
//! an environment is being set up. Running it again inserts duplicates.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cafe_seed::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let seeder = Seeder::connect(&config).await?;
//! let summary = seeder.run(time::OffsetDateTime::now_utc()).await?;
//! println!("{SUCCESS_MESSAGE}");
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod models;

/// Line printed to stdout once every document has been written.
pub const SUCCESS_MESSAGE: &str = "MongoDB initialized successfully!";

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::SUCCESS_MESSAGE;
    pub use crate::config::SeedConfig;
    pub use crate::db::{CollectionCounts, SeedError, SeedSummary, Seeder};
    pub use crate::models::{Feedback, OrderHistory, OrderStatus, StatusChange};
}
