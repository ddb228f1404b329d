//! Document shapes written by the seed loader.
//!
//! No schema is enforced on the server side. Ids, ratings and sentiment
//! scores are stored as given.

use bson::DateTime;
use serde::{Deserialize, Serialize};

/// A customer review linked to an order and a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub order_id: i32,
    pub customer_id: i32,
    /// Expected to be 1-5.
    pub rating: i32,
    pub comment: String,
    /// Sentiment score. No range is assumed.
    pub sentiment: i32,
    /// Creation time of the record.
    pub date: DateTime,
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Paid,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Paid => "paid",
            OrderStatus::Completed => "completed",
        }
    }
}

/// A single transition in an order's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub timestamp: DateTime,
}

/// Chronological status transitions of one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    pub order_id: i32,
    pub status_changes: Vec<StatusChange>,
}
