//! Ready-time estimation.

use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};
use tracing::debug;

use cantina_types::{
    InvalidInputError, OrderLineItem, PredictionFactors, PredictionRequest, PredictionResult,
};

use crate::config::EngineConfig;
use crate::factors;
use crate::profiles::VendorProfiles;

/// Milliseconds per minute.
const MS_PER_MINUTE: f64 = 60_000.0;

/// Pickup ready-time estimator for a single vendor configuration.
///
/// Estimation is a pure function of the order, the reference time, the queue
/// length and the configuration, so one estimator can be shared freely
/// across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimator {
    config: EngineConfig,
}

impl Estimator {
    /// Creates an estimator with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates an estimator for a vendor from the global profile table.
    ///
    /// Unknown or absent vendors use the default profile.
    #[must_use]
    pub fn for_vendor(vendor_id: Option<&str>) -> Self {
        Self::new(VendorProfiles::global().resolve(vendor_id).clone())
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Estimates the ready time of an order.
    ///
    /// The hour used for peak detection is read in the reference time's own
    /// offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the estimate cannot be added to the reference
    /// time without leaving the supported date range.
    pub fn predict(
        &self,
        line_items: &[OrderLineItem],
        reference_time: DateTime<FixedOffset>,
        queue_length: u32,
    ) -> Result<PredictionResult, InvalidInputError> {
        let factors = self.factors(line_items, reference_time.hour(), queue_length);

        let estimated_wait_minutes = factors::round_to_half_minute(
            factors.combined_minutes() + self.config.acceptance_buffer_minutes(),
        );

        let ready_at = TimeDelta::try_milliseconds((estimated_wait_minutes * MS_PER_MINUTE) as i64)
            .and_then(|wait| reference_time.checked_add_signed(wait))
            .ok_or(InvalidInputError::EstimateOutOfRange {
                minutes: estimated_wait_minutes,
            })?;

        let confidence = factors::confidence(queue_length);

        debug!(
            items = line_items.len(),
            queue_length,
            base_time = factors.base_time_minutes,
            load_factor = factors.load_factor,
            peak_factor = factors.peak_factor,
            complexity_factor = factors.complexity_factor,
            estimated_wait_minutes,
            confidence,
            "estimated ready time"
        );

        Ok(PredictionResult {
            ready_at,
            estimated_wait_minutes,
            confidence,
            queue_position: u64::from(queue_length) + 1,
            factors,
        })
    }

    /// Estimates the ready time for a request.
    ///
    /// # Errors
    ///
    /// See [`Estimator::predict`].
    pub fn predict_request(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, InvalidInputError> {
        self.predict(
            &request.line_items,
            request.reference_time,
            request.queue_length,
        )
    }

    /// Computes every factor for an order without combining them.
    #[must_use]
    pub fn factors(
        &self,
        line_items: &[OrderLineItem],
        hour: u32,
        queue_length: u32,
    ) -> PredictionFactors {
        PredictionFactors {
            base_time_minutes: factors::base_time_minutes(
                line_items,
                self.config.parallel_efficiency(),
            ),
            load_factor: factors::load_factor(queue_length, self.config.capacity()),
            peak_factor: factors::peak_factor(hour, self.config.peak_windows()),
            complexity_factor: factors::complexity_factor(line_items),
        }
    }

    /// Formats a prediction as a human-readable summary.
    #[must_use]
    pub fn format_prediction(result: &PredictionResult) -> String {
        format!(
            "Ready at:   {}\n\
             Wait:       {}\n\
             Queue:      position {}\n\
             Confidence: {:.0}%\n\
             Factors:    base {:.2} min, load x{:.3}, peak x{:.2}, complexity x{:.2}",
            result.ready_at.format("%Y-%m-%d %H:%M:%S %:z"),
            Self::format_wait(result.estimated_wait_minutes),
            result.queue_position,
            result.confidence * 100.0,
            result.factors.base_time_minutes,
            result.factors.load_factor,
            result.factors.peak_factor,
            result.factors.complexity_factor,
        )
    }

    /// Formats a wait in human-readable form (e.g., "22.5 min", "1h 4.5m").
    #[must_use]
    pub fn format_wait(minutes: f64) -> String {
        if minutes < 60.0 {
            return format!("{minutes} min");
        }
        let hours = (minutes / 60.0).floor();
        let rest = minutes - hours * 60.0;
        if rest > 0.0 {
            format!("{hours}h {rest}m")
        } else {
            format!("{hours}h")
        }
    }
}
