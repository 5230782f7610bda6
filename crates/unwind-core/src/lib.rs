//! Core domain model and flattening transform for outcome events.
//!
//! Provides the typed representation of graded-assessment outcome events,
//! the pure transform that unwinds each event's item results into flat
//! per-question records, and the error taxonomy shared with the HTTP
//! surface. No I/O lives here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod flatten;

pub use error::{Result, UnwindError};
pub use event::{
    Actor, Attempt, AttemptExtensions, EventEnvelope, GeneratedResult, Group, GroupExtensions,
    ItemResult, OutcomeEvent,
};
pub use flatten::{flatten, FlatQuestionRecord, QuestionRecord};
