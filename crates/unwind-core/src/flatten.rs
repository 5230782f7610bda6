//! Flattening transform from outcome events to per-question records.
//!
//! The single non-trivial operation of the service: one event with N item
//! results becomes N flat records, each combining the item's scoring detail
//! with identity and context fields copied from the enclosing event.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::{Result, UnwindError};
use crate::event::EventEnvelope;

/// One flattened question record, ready for downstream ingestion.
///
/// Timestamps serialize as `null` when the input lacked them; the opaque
/// `system` block is omitted entirely unless the input carried one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatQuestionRecord {
    /// Scoring detail for the question.
    pub question: QuestionRecord,
    /// Result-session identifier from the generated result set.
    pub learnosity_session_id: String,
    /// LMS context identifier from the group extensions.
    pub learnosity_user_id: String,
    /// Attempt number, 0 when the platform did not record one.
    pub assessment_attempt: i64,
    /// Course offering identifier from the group extensions.
    pub course_offering_id: String,
    /// Event submission time.
    pub event_submit_time: Option<DateTime<Utc>>,
    /// When the attempt started.
    pub assessment_start_time: Option<DateTime<Utc>>,
    /// When the attempt ended.
    pub assessment_end_time: Option<DateTime<Utc>>,
    /// Question type tag, copied verbatim from the item result.
    pub question_type: String,
    /// Item bank reference, copied verbatim from the item result.
    pub item_reference: String,
    /// Opaque caller identifiers echoed back unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Value>,
}

/// Per-question scoring fields nested under `question`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// The student the attempt belongs to.
    pub student_id: String,
    /// Question bank reference.
    pub question_id: String,
    /// Display/submission order within the attempt.
    pub sequence_number: i64,
    /// Normalized score, never negative.
    pub score: Number,
    /// Normalized maximum score, never negative.
    pub max_score: Number,
    /// Classroom identifier.
    pub classroom_id: String,
    /// Assessment identifier from the attempt extensions.
    pub assessment_id: String,
    /// Assessment type from the attempt extensions.
    pub assessment_type: String,
}

/// Unwinds one outcome event into flat per-question records.
///
/// Produces exactly one record per item result, preserving their order.
/// The transform is pure: no logging, no I/O, no shared state.
///
/// # Errors
///
/// Returns [`UnwindError::RoleMismatch`] when the actor carries no
/// learner-designated role. Structural problems never surface here; the
/// envelope is already fully typed.
pub fn flatten(envelope: &EventEnvelope) -> Result<Vec<FlatQuestionRecord>> {
    let event = &envelope.event;

    if !event.actor.has_learner_role() {
        return Err(UnwindError::RoleMismatch { roles: event.actor.roles.clone() });
    }

    let records = event
        .generated
        .item_results
        .iter()
        .map(|item| FlatQuestionRecord {
            question: QuestionRecord {
                student_id: event.actor.id.clone(),
                question_id: item.question_reference.clone(),
                sequence_number: item.sequence_number,
                score: normalize_score(item.score.as_ref()),
                max_score: normalize_score(item.max_score.as_ref()),
                classroom_id: event.group.id.clone(),
                assessment_id: event.object.extensions.assessment_id.clone(),
                assessment_type: event.object.extensions.assessment_type.clone(),
            },
            learnosity_session_id: event.generated.id.clone(),
            learnosity_user_id: event.group.extensions.context_id.clone(),
            assessment_attempt: event.object.count.unwrap_or(0),
            course_offering_id: event.group.extensions.course_offering_id.clone(),
            event_submit_time: event.event_time,
            assessment_start_time: event.object.started_at_time,
            assessment_end_time: event.object.ended_at_time,
            question_type: item.question_type.clone(),
            item_reference: item.item_reference.clone(),
            system: envelope.system.clone(),
        })
        .collect();

    Ok(records)
}

/// Clamps a raw score to the non-negative range.
///
/// Absent, null, zero, and negative all normalize to the literal 0; a
/// strictly positive value passes through with its original JSON number
/// representation intact.
fn normalize_score(raw: Option<&Number>) -> Number {
    match raw {
        Some(n) if n.as_f64().is_some_and(|v| v > 0.0) => n.clone(),
        _ => Number::from(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: i64) -> Number {
        Number::from(v)
    }

    #[test]
    fn positive_scores_pass_through() {
        assert_eq!(normalize_score(Some(&num(7))), num(7));
        assert_eq!(normalize_score(Some(&num(1))), num(1));
    }

    #[test]
    fn non_positive_scores_clamp_to_zero() {
        assert_eq!(normalize_score(Some(&num(0))), num(0));
        assert_eq!(normalize_score(Some(&num(-1))), num(0));
        assert_eq!(normalize_score(None), num(0));
    }

    #[test]
    fn fractional_scores_keep_their_representation() {
        let half = Number::from_f64(0.5).unwrap();
        assert_eq!(normalize_score(Some(&half)), half);

        let negative = Number::from_f64(-2.5).unwrap();
        assert_eq!(normalize_score(Some(&negative)), num(0));
    }
}
