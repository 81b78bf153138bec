use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Candidate,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Unverified,
}

/// Where a field's current value originally came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationSource {
    ResumeParse,
    ManualEntry,
    Zoho,
    Linkedin,
    Other,
}

/// Verification state of a single field. Exactly one record exists per
/// `(entity_type, entity_id, field_name)` — writes upsert in place, value
/// and status history lives in the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldVerification {
    pub id: Uuid,
    pub entity_type: EntityKind,
    pub entity_id: String,
    pub field_name: String,
    pub current_value: Option<String>,
    pub status: VerificationStatus,
    pub source: VerificationSource,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProgress {
    pub verified: usize,
    pub total: usize,
    pub percentage: u32,
}

impl SectionProgress {
    pub fn of(verified: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((verified as f64 / total as f64) * 100.0).round() as u32
        };
        Self { verified, total, percentage }
    }
}
