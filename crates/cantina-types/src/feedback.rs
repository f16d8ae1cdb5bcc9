//! Predicted-versus-actual feedback records.

use serde::{Deserialize, Serialize};

/// Observed preparation time reported after an order was picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Order the feedback refers to.
    pub order_id: String,
    /// Vendor that prepared the order, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    /// Minutes the engine predicted.
    #[serde(rename = "predicted_time")]
    pub predicted_minutes: f64,
    /// Minutes the order actually took.
    #[serde(rename = "actual_time")]
    pub actual_minutes: f64,
}

impl FeedbackRecord {
    /// Returns the absolute prediction error in minutes.
    #[must_use]
    pub fn absolute_error_minutes(&self) -> f64 {
        (self.actual_minutes - self.predicted_minutes).abs()
    }
}

/// Acknowledgment returned for a feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAck {
    /// Whether the record was accepted.
    pub success: bool,
    /// Human-readable status.
    pub message: String,
}

impl FeedbackAck {
    /// Creates a successful acknowledgment.
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Feedback recorded successfully".to_string(),
        }
    }
}
