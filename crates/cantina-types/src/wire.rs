//! JSON wire format for prediction requests and error payloads.
//!
//! The payload mirrors the request body accepted by the ordering backend:
//! every field is optional and missing values fall back to defaults when the
//! payload is resolved into a [`PredictionRequest`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{Clock, InvalidInputError, OrderLineItem, PredictionRequest};

/// Offset-less formats accepted for reference timestamps, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying formats accepted in addition to RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// A line item as sent by the ordering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireLineItem {
    /// Menu item identifier.
    pub food_item_id: String,
    /// Units ordered. Signed so negative values can be reported, not dropped.
    pub quantity: i64,
    /// Per-unit preparation time in minutes.
    pub base_prep_time: f64,
}

/// Prediction request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    /// Vendor the order is placed with, used to pick a vendor profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    /// Ordered items; an absent list is an empty order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_items: Option<Vec<WireLineItem>>,
    /// ISO-8601 reference time; defaults to the clock's current time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_time: Option<String>,
    /// Orders already waiting; defaults to zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_queue_length: Option<i64>,
}

impl PredictionPayload {
    /// Resolves defaults and validates the payload into a request.
    ///
    /// # Errors
    ///
    /// Returns an error if any line item is invalid, the queue length is
    /// negative, or the timestamp cannot be parsed.
    pub fn resolve<C: Clock + ?Sized>(
        &self,
        clock: &C,
    ) -> Result<PredictionRequest, InvalidInputError> {
        let line_items = self
            .order_items
            .iter()
            .flatten()
            .map(|item| {
                OrderLineItem::from_signed(
                    item.food_item_id.as_str(),
                    item.quantity,
                    item.base_prep_time,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let reference_time = match self.current_time.as_deref() {
            Some(raw) => parse_reference_time(raw)?,
            None => clock.now(),
        };

        let queue_length = match self.current_queue_length {
            Some(raw) => u32::try_from(raw).map_err(|_| InvalidInputError::QueueLength(raw))?,
            None => 0,
        };

        Ok(PredictionRequest::new(
            line_items,
            reference_time,
            queue_length,
        ))
    }
}

/// Error body returned when a prediction fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The underlying error, rendered.
    pub error: String,
    /// Summary of the failed operation.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error body for a failed operation.
    #[must_use]
    pub fn new(error: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

/// Parses an ISO-8601 reference time.
///
/// A trailing `Z` is read as `+00:00`. Timestamps without an offset are
/// taken to be UTC, and a bare date means midnight UTC.
///
/// # Errors
///
/// Returns [`InvalidInputError::MalformedTimestamp`] if no accepted format
/// matches.
pub fn parse_reference_time(input: &str) -> Result<DateTime<FixedOffset>, InvalidInputError> {
    let trimmed = input.trim();
    let normalized = match trimmed.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => trimmed.to_string(),
    };

    let rfc3339_err = match DateTime::parse_from_rfc3339(&normalized) {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };

    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Ok(parsed);
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Ok(naive.and_utc().fixed_offset());
    }

    if let Some(midnight) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc().fixed_offset());
    }

    Err(InvalidInputError::MalformedTimestamp {
        input: input.to_string(),
        reason: rfc3339_err.to_string(),
    })
}
