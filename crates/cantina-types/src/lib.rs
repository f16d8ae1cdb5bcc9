//! Core types for the cantina pickup ready-time estimator.
//!
//! This crate provides the data structures shared by the engine and its callers:
//!
//! - [`OrderLineItem`] - A validated order line with quantity and prep time
//! - [`PredictionRequest`] - Order contents plus queue and time context
//! - [`PredictionResult`] - Ready time, wait, confidence and factor breakdown
//! - [`FeedbackRecord`] - Predicted-versus-actual report for a finished order
//! - [`Clock`] - Injectable source of the current time
//! - [`wire`] - JSON request and error payloads

#![doc(issue_tracker_base_url = "https://github.com/cantina-rs/cantina/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod error;
mod feedback;
mod order;
mod prediction;
pub mod wire;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, InvalidInputError};
pub use feedback::{FeedbackAck, FeedbackRecord};
pub use order::{ItemId, OrderLineItem};
pub use prediction::{PredictionFactors, PredictionRequest, PredictionResult};
pub use wire::{ErrorResponse, PredictionPayload, WireLineItem, parse_reference_time};
