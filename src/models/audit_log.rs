use crate::models::verification::VerificationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    StatusChange,
    ValueUpdate,
}

/// Append-only change record for one verification. Entries are immutable
/// once written; display order is newest-first with last-inserted winning
/// timestamp ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationAuditLog {
    pub id: Uuid,
    pub verification_id: Uuid,
    pub action: AuditAction,
    pub old_status: Option<VerificationStatus>,
    pub new_status: Option<VerificationStatus>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_by: Option<Uuid>,
    pub changed_at: DateTime<Utc>,
    pub reason: Option<String>,
}
