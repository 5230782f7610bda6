//! Error types for outcome event processing.
//!
//! Defines the per-event error taxonomy with numeric codes so the HTTP
//! layer can log and report failures without inspecting variants.

use thiserror::Error;

/// Result type alias using `UnwindError`.
pub type Result<T> = std::result::Result<T, UnwindError>;

/// Failures raised while validating or flattening a single outcome event.
///
/// These are per-record errors: one failing event never affects how the
/// rest of a batch is processed.
#[derive(Debug, Error)]
pub enum UnwindError {
    /// The event's actor carries no learner-designated role (code 21).
    #[error("Event lacks Learner role (roles: {roles:?})")]
    RoleMismatch {
        /// The role strings that were actually present on the actor.
        roles: Vec<String>,
    },

    /// The record does not match the outcome event structure (code 22).
    ///
    /// Covers missing required fields and mistyped values, surfaced at the
    /// decode boundary rather than as a fault mid-transform.
    #[error("Invalid outcome event: {reason}")]
    InvalidEvent {
        /// Decoder description of what was missing or mistyped.
        reason: String,
    },
}

impl UnwindError {
    /// Returns the numeric error code for this failure.
    pub const fn code(&self) -> u16 {
        match self {
            Self::RoleMismatch { .. } => 21,
            Self::InvalidEvent { .. } => 22,
        }
    }
}
