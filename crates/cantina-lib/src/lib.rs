//! Pickup ready-time estimation for canteen and food-court vendors.
//!
//! This is a facade crate that re-exports functionality from the cantina
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use cantina_lib::{Estimator, PredictionPayload, SystemClock};
//!
//! let payload: PredictionPayload = serde_json::from_str(
//!     r#"{
//!         "order_items": [{"food_item_id": "dosa", "quantity": 2, "base_prep_time": 10}],
//!         "current_time": "2024-03-04T09:00:00Z",
//!         "current_queue_length": 0
//!     }"#,
//! )?;
//!
//! let request = payload.resolve(&SystemClock)?;
//! let prediction = Estimator::for_vendor(payload.vendor_id.as_deref()).predict_request(&request)?;
//!
//! assert_eq!(prediction.estimated_wait_minutes, 22.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/cantina-rs/cantina/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use cantina_types::*;

// Re-export the engine
pub use cantina_estimate::{
    DEFAULT_ACCEPTANCE_BUFFER_MINUTES, DEFAULT_CAPACITY, DEFAULT_PARALLEL_EFFICIENCY,
    DEFAULT_PROFILE, EngineConfig, Estimator, FeedbackSink, NoopFeedbackSink, PeakWindow,
    VendorProfiles, factors,
};

/// Prelude module for convenient imports.
///
/// ```
/// use cantina_lib::prelude::*;
/// ```
pub mod prelude {
    pub use cantina_types::{
        Clock, ConfigError, FeedbackAck, FeedbackRecord, FixedClock, InvalidInputError, ItemId,
        OrderLineItem, PredictionFactors, PredictionPayload, PredictionRequest, PredictionResult,
        SystemClock,
    };

    pub use cantina_estimate::{
        EngineConfig, Estimator, FeedbackSink, NoopFeedbackSink, PeakWindow, VendorProfiles,
    };
}
