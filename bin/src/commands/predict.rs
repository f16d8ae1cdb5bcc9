//! Predict command implementation.
//!
//! A prediction request is assembled from an optional JSON body and the
//! command-line flags, with flags taking precedence. Missing values fall back
//! to an empty order, a queue of zero and the current time.

use anyhow::{Context, Result};
use cantina_lib::{ErrorResponse, parse_reference_time, prelude::*};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::config::load_profiles;
use crate::display::{Format, print_json};

/// Estimate the ready time of an order and print it.
pub(crate) fn predict(
    items: &[String],
    queue: Option<i64>,
    at: Option<&str>,
    vendor: Option<&str>,
    request_path: Option<&Path>,
    profiles_path: Option<&Path>,
    format: Format,
) -> Result<()> {
    let outcome = run(items, queue, at, vendor, request_path, profiles_path);

    match (outcome, format) {
        (Ok(result), Format::Text) => {
            println!("{}", Estimator::format_prediction(&result));
            Ok(())
        }
        (Ok(result), Format::Json) => print_json(&result),
        (Err(e), Format::Json) => {
            print_json(&ErrorResponse::new(format!("{e:#}"), "Prediction failed"))?;
            Err(e)
        }
        (Err(e), Format::Text) => Err(e),
    }
}

fn run(
    items: &[String],
    queue: Option<i64>,
    at: Option<&str>,
    vendor: Option<&str>,
    request_path: Option<&Path>,
    profiles_path: Option<&Path>,
) -> Result<PredictionResult> {
    let mut payload = match request_path {
        Some(path) => read_payload(path)?,
        None => PredictionPayload::default(),
    };
    if let Some(vendor) = vendor {
        payload.vendor_id = Some(vendor.to_string());
    }

    let request = build_request(&payload, items, queue, at, &SystemClock)?;

    let profiles = load_profiles(profiles_path)?;
    let config = profiles.resolve(payload.vendor_id.as_deref());
    debug!(
        vendor = payload.vendor_id.as_deref().unwrap_or("default"),
        capacity = config.capacity().get(),
        "resolved vendor profile"
    );

    let estimator = Estimator::new(config.clone());
    Ok(estimator.predict_request(&request)?)
}

/// Read a JSON request body from a file, or from stdin for `-`.
fn read_payload(path: &Path) -> Result<PredictionPayload> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?
    };

    serde_json::from_str(&json).context("Invalid prediction request")
}

/// Resolve the payload and apply flag overrides.
fn build_request<C: Clock>(
    payload: &PredictionPayload,
    items: &[String],
    queue: Option<i64>,
    at: Option<&str>,
    clock: &C,
) -> Result<PredictionRequest> {
    let mut request = payload.resolve(clock)?;

    if !items.is_empty() {
        request.line_items = items
            .iter()
            .map(|spec| spec.parse::<OrderLineItem>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
    }
    if let Some(raw) = queue {
        request.queue_length =
            u32::try_from(raw).map_err(|_| InvalidInputError::QueueLength(raw))?;
    }
    if let Some(raw) = at {
        request.reference_time = parse_reference_time(raw)?;
    }

    Ok(request)
}
