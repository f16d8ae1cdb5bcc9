//! Feedback acknowledgment.

use cantina_types::{FeedbackAck, FeedbackRecord};
use tracing::info;

/// Receives predicted-versus-actual reports for finished orders.
pub trait FeedbackSink {
    /// Records a report and acknowledges it.
    fn record(&self, feedback: &FeedbackRecord) -> FeedbackAck;
}

/// Sink that logs feedback and discards it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedbackSink;

impl FeedbackSink for NoopFeedbackSink {
    fn record(&self, feedback: &FeedbackRecord) -> FeedbackAck {
        info!(
            order_id = %feedback.order_id,
            vendor_id = feedback.vendor_id.as_deref().unwrap_or("-"),
            predicted_minutes = feedback.predicted_minutes,
            actual_minutes = feedback.actual_minutes,
            absolute_error_minutes = feedback.absolute_error_minutes(),
            "feedback received"
        );
        FeedbackAck::accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_acknowledges() {
        let record = FeedbackRecord {
            order_id: "order-42".to_string(),
            vendor_id: Some("main-canteen".to_string()),
            predicted_minutes: 18.5,
            actual_minutes: 21.0,
        };

        let ack = NoopFeedbackSink.record(&record);
        assert!(ack.success);
        assert_eq!(ack.message, "Feedback recorded successfully");
    }
}
