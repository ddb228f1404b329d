//! The literal documents written by the seed loader.
//!
//! Every timestamp is derived from the `now` passed in, so a run stamps its
//! documents with the time it was executed.

use bson::DateTime;
use time::{Duration, OffsetDateTime};

use crate::models::{Feedback, OrderHistory, OrderStatus, StatusChange};

/// How long before `now` the sample order was created.
const CREATED_AGO: Duration = Duration::seconds(600);

/// How long before `now` the sample order was paid.
const PAID_AGO: Duration = Duration::seconds(500);

/// Two example reviews for orders 1 and 2.
pub fn feedback(now: OffsetDateTime) -> Vec<Feedback> {
    let date = DateTime::from_time_0_3(now);

    vec![
        Feedback {
            order_id: 1,
            customer_id: 1,
            rating: 5,
            comment: "Капучино отличный, обслуживание быстрое!".to_string(),
            sentiment: 5,
            date,
        },
        Feedback {
            order_id: 2,
            customer_id: 2,
            rating: 4,
            comment: "Десерт вкусный, но кофе остыл.".to_string(),
            sentiment: 3,
            date,
        },
    ]
}

/// Lifecycle of order 1: created, paid, completed.
pub fn order_history(now: OffsetDateTime) -> OrderHistory {
    let at = |ago: Duration| DateTime::from_time_0_3(now - ago);

    OrderHistory {
        order_id: 1,
        status_changes: vec![
            StatusChange {
                status: OrderStatus::Created,
                timestamp: at(CREATED_AGO),
            },
            StatusChange {
                status: OrderStatus::Paid,
                timestamp: at(PAID_AGO),
            },
            StatusChange {
                status: OrderStatus::Completed,
                timestamp: at(Duration::ZERO),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_values() {
        let feedback = feedback(OffsetDateTime::now_utc());

        assert_eq!(feedback.len(), 2);
        let summary: Vec<_> = feedback
            .iter()
            .map(|f| (f.order_id, f.customer_id, f.rating, f.sentiment))
            .collect();
        assert_eq!(summary, vec![(1, 1, 5, 5), (2, 2, 4, 3)]);
        assert!(feedback[0].comment.starts_with("Капучино"));
        assert!(feedback[1].comment.ends_with("кофе остыл."));
    }

    #[test]
    fn test_feedback_stamped_with_now() {
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let feedback = feedback(now);

        for record in &feedback {
            assert_eq!(record.date.timestamp_millis(), 1_700_000_000_000);
        }
    }

    #[test]
    fn test_order_history_sequence() {
        let history = order_history(OffsetDateTime::now_utc());

        assert_eq!(history.order_id, 1);
        let statuses: Vec<_> = history.status_changes.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![OrderStatus::Created, OrderStatus::Paid, OrderStatus::Completed]
        );
    }

    #[test]
    fn test_order_history_timestamps() {
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let history = order_history(now);

        let millis: Vec<i64> = history
            .status_changes
            .iter()
            .map(|c| c.timestamp.timestamp_millis())
            .collect();
        assert_eq!(
            millis,
            vec![1_699_999_400_000, 1_699_999_500_000, 1_700_000_000_000]
        );
        assert!(millis.windows(2).all(|w| w[0] <= w[1]));
    }
}
