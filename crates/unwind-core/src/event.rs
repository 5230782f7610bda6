//! Typed wire model for incoming outcome events.
//!
//! Mirrors the Caliper-style JSON that assessment platforms emit for one
//! graded attempt. Fields the transform dereferences are required here, so
//! a malformed record fails at the decode boundary with a typed error
//! instead of faulting mid-transform. Fields the payload may legitimately
//! omit (attempt count, timestamps, raw scores) are `Option`. Unknown keys
//! are ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::{Result, UnwindError};

/// One element of the request batch: an outcome event plus an optional
/// opaque `system` block the caller wants echoed back unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope {
    /// The outcome event itself.
    pub event: OutcomeEvent,
    /// Opaque passthrough identifiers, copied verbatim into every record
    /// derived from this event.
    #[serde(default)]
    pub system: Option<Value>,
}

impl EventEnvelope {
    /// Decodes one batch element into the typed model.
    ///
    /// # Errors
    ///
    /// Returns [`UnwindError::InvalidEvent`] when a required field is
    /// missing or a value has the wrong type.
    pub fn from_json(record: Value) -> Result<Self> {
        serde_json::from_value(record)
            .map_err(|e| UnwindError::InvalidEvent { reason: e.to_string() })
    }
}

/// A graded-assessment outcome event for one actor and one attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeEvent {
    /// The person the event is about.
    pub actor: Actor,
    /// The assessment attempt wrapper.
    pub object: Attempt,
    /// The generated result set holding per-question results.
    pub generated: GeneratedResult,
    /// Course/context grouping.
    pub group: Group,
    /// When the event was submitted, if the platform recorded it.
    #[serde(default, rename = "eventTime")]
    pub event_time: Option<DateTime<Utc>>,
}

/// The person associated with the event.
#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    /// Platform identifier for the student.
    #[serde(rename = "@id")]
    pub id: String,
    /// LIS role URNs carried by the actor.
    pub roles: Vec<String>,
}

impl Actor {
    /// True when any role string contains `learner`, case-insensitively.
    pub fn has_learner_role(&self) -> bool {
        self.roles.iter().any(|role| role.to_lowercase().contains("learner"))
    }
}

/// The assessment attempt the result set belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Attempt {
    /// Attempt identifier.
    #[serde(rename = "@id")]
    pub id: String,
    /// Assessment metadata sidecar.
    pub extensions: AttemptExtensions,
    /// Attempt number, starting at 1. Absent on some platforms.
    #[serde(default)]
    pub count: Option<i64>,
    /// When the attempt started.
    #[serde(default, rename = "startedAtTime")]
    pub started_at_time: Option<DateTime<Utc>>,
    /// When the attempt ended.
    #[serde(default, rename = "endedAtTime")]
    pub ended_at_time: Option<DateTime<Utc>>,
}

/// Assessment metadata carried on the attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct AttemptExtensions {
    /// Assessment identifier.
    #[serde(rename = "assessmentId")]
    pub assessment_id: String,
    /// Assessment type tag, e.g. "Diagnostic Assessment".
    #[serde(rename = "assessmentType")]
    pub assessment_type: String,
}

/// The generated result set for the attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedResult {
    /// Result-session identifier.
    #[serde(rename = "@id")]
    pub id: String,
    /// Per-question results, in display/submission order.
    #[serde(rename = "itemResults")]
    pub item_results: Vec<ItemResult>,
}

/// One question attempt within the result set.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResult {
    /// Question bank reference.
    pub question_reference: String,
    /// Item bank reference.
    pub item_reference: String,
    /// Display/submission order within the attempt.
    #[serde(rename = "sequenceNumber")]
    pub sequence_number: i64,
    /// Question type tag, e.g. "mcq".
    pub question_type: String,
    /// Raw score. May be null, negative, or absent entirely.
    #[serde(default)]
    pub score: Option<Number>,
    /// Raw maximum score. May be null, non-positive, or absent.
    #[serde(default)]
    pub max_score: Option<Number>,
}

/// Course/context grouping for the event.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    /// Classroom identifier.
    #[serde(rename = "@id")]
    pub id: String,
    /// Course/context metadata sidecar.
    pub extensions: GroupExtensions,
}

/// Course/context metadata carried on the group.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupExtensions {
    /// LMS context identifier.
    #[serde(rename = "contextId")]
    pub context_id: String,
    /// Course offering identifier.
    #[serde(rename = "CourseOfferingId")]
    pub course_offering_id: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn learner_role_matches_case_insensitively() {
        let actor = Actor {
            id: "student-1".into(),
            roles: vec!["urn:lti:instrole:ims/lis/Learner".into()],
        };
        assert!(actor.has_learner_role());

        let combined = Actor {
            id: "student-2".into(),
            roles: vec!["urn:lti:instrole:ims/lis/Learner,Learner".into()],
        };
        assert!(combined.has_learner_role());
    }

    #[test]
    fn teacher_only_roles_do_not_match() {
        let actor = Actor {
            id: "teacher-1".into(),
            roles: vec!["urn:lti:instrole:ims/lis/Teacher".into()],
        };
        assert!(!actor.has_learner_role());
    }

    #[test]
    fn empty_role_list_does_not_match() {
        let actor = Actor { id: "nobody".into(), roles: vec![] };
        assert!(!actor.has_learner_role());
    }

    #[test]
    fn non_object_record_is_invalid() {
        let err = EventEnvelope::from_json(json!("not an event")).unwrap_err();
        assert_eq!(err.code(), 22);
    }

    #[test]
    fn missing_event_key_is_invalid() {
        let err = EventEnvelope::from_json(json!({ "system": {} })).unwrap_err();
        assert!(matches!(err, UnwindError::InvalidEvent { .. }));
    }
}
