//! Pickup ready-time estimation for cantina.
//!
//! This crate turns an order, the vendor's queue and the time of day into a
//! predicted ready time:
//!
//! - [`Estimator`] - Combines the factors into a [`PredictionResult`](cantina_types::PredictionResult)
//! - [`factors`] - Base time, load, peak-hour, complexity and confidence calculators
//! - [`EngineConfig`] - Immutable engine parameters, including [`PeakWindow`]s
//! - [`VendorProfiles`] - Per-vendor configurations with a default fallback
//! - [`FeedbackSink`] - Acknowledges predicted-versus-actual reports
//!
//! # Example
//!
//! ```
//! use cantina_estimate::Estimator;
//! use cantina_types::OrderLineItem;
//! use chrono::DateTime;
//!
//! let estimator = Estimator::default();
//! let items = [OrderLineItem::new("burger", 2, 10.0).unwrap()];
//! let placed_at = DateTime::parse_from_rfc3339("2024-03-04T09:00:00Z").unwrap();
//!
//! let prediction = estimator.predict(&items, placed_at, 0).unwrap();
//! assert_eq!(prediction.estimated_wait_minutes, 22.0);
//! assert_eq!(prediction.queue_position, 1);
//! ```

#![doc(issue_tracker_base_url = "https://github.com/cantina-rs/cantina/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod estimator;
pub mod factors;
mod feedback;
mod profiles;

pub use config::{
    DEFAULT_ACCEPTANCE_BUFFER_MINUTES, DEFAULT_CAPACITY, DEFAULT_PARALLEL_EFFICIENCY,
    EngineConfig, MAX_PEAK_WINDOW_HOURS, PeakWindow,
};
pub use estimator::Estimator;
pub use feedback::{FeedbackSink, NoopFeedbackSink};
pub use profiles::{DEFAULT_PROFILE, VendorProfiles};
