//! Batch unwind handler.
//!
//! Accepts a JSON array of outcome event envelopes, flattens each event's
//! item results into per-question records, and returns the concatenated
//! array in input order. Records that fail validation are skipped with a
//! structured warning; only an empty or unparseable body rejects the
//! request.

use axum::Json;
use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use unwind_core::{flatten, EventEnvelope, FlatQuestionRecord};

use crate::error::ApiError;

/// Unwinds a batch of outcome events into flat question records.
///
/// Each batch element is decoded and flattened independently. Events whose
/// actor lacks a learner role, or that are structurally invalid, contribute
/// zero records and are logged with their error code.
///
/// # Errors
///
/// - [`ApiError::MissingBody`] when the request body is empty.
/// - [`ApiError::MalformedJson`] when the body is not a JSON array.
#[instrument(name = "unwind_batch", skip(body), fields(payload_bytes = body.len()))]
pub async fn unwind_batch(body: Bytes) -> Result<Json<Vec<FlatQuestionRecord>>, ApiError> {
    if body.is_empty() {
        warn!("Rejecting request with empty body");
        return Err(ApiError::MissingBody);
    }

    let batch: Vec<Value> = serde_json::from_slice(&body)?;
    info!(events = batch.len(), "Unwinding outcome event batch");

    let mut flat = Vec::new();
    let mut skipped = 0usize;

    for (index, record) in batch.into_iter().enumerate() {
        match EventEnvelope::from_json(record).and_then(|envelope| flatten(&envelope)) {
            Ok(records) => flat.extend(records),
            Err(e) => {
                skipped += 1;
                warn!(index, code = e.code(), error = %e, "Skipping outcome event");
            },
        }
    }

    if skipped > 0 {
        info!(skipped, produced = flat.len(), "Batch completed with skipped events");
    } else {
        debug!(produced = flat.len(), "Batch completed");
    }

    Ok(Json(flat))
}
