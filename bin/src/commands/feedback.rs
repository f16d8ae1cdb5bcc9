//! Feedback command implementation.
//!
//! Feedback is acknowledged and logged but not stored.

use anyhow::{Result, ensure};
use cantina_lib::prelude::*;

use crate::display::{Format, print_json};

/// Record the actual preparation time of an order.
pub(crate) fn feedback(
    order_id: String,
    predicted: f64,
    actual: f64,
    vendor: Option<String>,
    format: Format,
) -> Result<()> {
    ensure!(
        predicted.is_finite() && predicted >= 0.0,
        "Predicted minutes must be a non-negative number, got {predicted}"
    );
    ensure!(
        actual.is_finite() && actual >= 0.0,
        "Actual minutes must be a non-negative number, got {actual}"
    );

    let record = FeedbackRecord {
        order_id,
        vendor_id: vendor,
        predicted_minutes: predicted,
        actual_minutes: actual,
    };
    let ack = NoopFeedbackSink.record(&record);

    match format {
        Format::Text => println!("{}", ack.message),
        Format::Json => print_json(&ack)?,
    }

    Ok(())
}
