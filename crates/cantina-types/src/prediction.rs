//! Prediction requests and results.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::OrderLineItem;

/// Everything the engine needs to estimate a single order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Items in the order. Their order does not affect the estimate.
    pub line_items: Vec<OrderLineItem>,
    /// Moment the order is placed, in the vendor's local offset.
    pub reference_time: DateTime<FixedOffset>,
    /// Orders already waiting at the vendor.
    pub queue_length: u32,
}

impl PredictionRequest {
    /// Creates a new prediction request.
    #[must_use]
    pub const fn new(
        line_items: Vec<OrderLineItem>,
        reference_time: DateTime<FixedOffset>,
        queue_length: u32,
    ) -> Self {
        Self {
            line_items,
            reference_time,
            queue_length,
        }
    }

    /// Returns the total number of units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.line_items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }
}

/// The multipliers that produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionFactors {
    /// Preparation time before any contextual adjustment.
    #[serde(rename = "base_time")]
    pub base_time_minutes: f64,
    /// Queue backlog multiplier.
    pub load_factor: f64,
    /// Busy-window multiplier.
    pub peak_factor: f64,
    /// Order variety and volume multiplier.
    pub complexity_factor: f64,
}

impl PredictionFactors {
    /// Returns the product of the base time and every multiplier.
    #[must_use]
    pub fn combined_minutes(&self) -> f64 {
        self.base_time_minutes * self.load_factor * self.peak_factor * self.complexity_factor
    }
}

/// Estimated ready time for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// When the order is expected to be ready for pickup.
    #[serde(rename = "predicted_ready_time")]
    pub ready_at: DateTime<FixedOffset>,
    /// Expected wait in minutes, a multiple of 0.5.
    pub estimated_wait_minutes: f64,
    /// Confidence in the estimate, in `[0, 1]`.
    pub confidence: f64,
    /// Position of this order once appended to the queue (1-based).
    pub queue_position: u64,
    /// Breakdown of the contributing factors.
    pub factors: PredictionFactors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_minutes() {
        let factors = PredictionFactors {
            base_time_minutes: 10.0,
            load_factor: 1.2,
            peak_factor: 2.0,
            complexity_factor: 1.1,
        };
        assert!((factors.combined_minutes() - 26.4).abs() < 1e-10);
    }

    #[test]
    fn test_result_wire_names() {
        let result = PredictionResult {
            ready_at: DateTime::parse_from_rfc3339("2024-03-04T09:22:00+05:30").unwrap(),
            estimated_wait_minutes: 22.0,
            confidence: 0.95,
            queue_position: 1,
            factors: PredictionFactors {
                base_time_minutes: 20.0,
                load_factor: 1.0,
                peak_factor: 1.0,
                complexity_factor: 1.0,
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["predicted_ready_time"], "2024-03-04T09:22:00+05:30");
        assert_eq!(json["queue_position"], 1);
        assert_eq!(json["factors"]["base_time"], 20.0);
        assert_eq!(json["factors"]["complexity_factor"], 1.0);
    }
}
