//! Database integration for seeding.
//!
//! The [`Seeder`] selects the target database on a connected client and
//! writes the fixture documents into it, one collection after the other.

mod seeder;

pub use seeder::{
    CollectionCounts, FEEDBACK_COLLECTION, ORDER_HISTORY_COLLECTION, SeedError, SeedSummary,
    Seeder,
};
