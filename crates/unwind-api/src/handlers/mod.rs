//! HTTP request handlers for the unwind API.
//!
//! Handlers follow a consistent pattern: validate the request envelope,
//! process each record independently, and respond with standardized error
//! shapes. Per-record failures are logged and skipped so one bad record
//! never fails the rest of a batch.

pub mod status;
pub mod unwind;

pub use status::service_status;
pub use unwind::unwind_batch;
