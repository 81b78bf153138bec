pub mod memory;

use crate::error::Result;
use crate::models::audit_log::VerificationAuditLog;
use crate::models::candidate::Candidate;
use crate::models::verification::{EntityKind, FieldVerification};
use crate::utils::field_path::FieldPath;
use uuid::Uuid;

/// Storage identity of a verification record: one record per key, upserted
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationKey {
    pub entity_type: EntityKind,
    pub entity_id: String,
    pub field_name: String,
}

impl VerificationKey {
    pub fn new(entity_type: EntityKind, entity_id: &str, field: &FieldPath) -> Self {
        Self {
            entity_type,
            entity_id: entity_id.to_string(),
            field_name: field.to_string(),
        }
    }

    pub fn of_record(record: &FieldVerification) -> Self {
        Self {
            entity_type: record.entity_type,
            entity_id: record.entity_id.clone(),
            field_name: record.field_name.clone(),
        }
    }
}

/// Persistence seam for candidate records. The shipped implementation is
/// in-memory; a SQL or KV backend slots in without touching service logic.
#[cfg_attr(test, mockall::automock)]
pub trait CandidateStore {
    fn get(&self, id: Uuid) -> Option<Candidate>;
    fn list(&self) -> Vec<Candidate>;
    fn find_by_email(&self, email: &str) -> Option<Candidate>;
    fn find_by_mobile(&self, mobile: &str) -> Option<Candidate>;
    fn upsert(&mut self, candidate: Candidate) -> Result<()>;
}

/// Persistence seam for verification state. `commit`/`commit_many` carry a
/// whole logical write — record upsert plus audit append land together or
/// not at all.
#[cfg_attr(test, mockall::automock)]
pub trait VerificationStore {
    fn get(&self, key: &VerificationKey) -> Option<FieldVerification>;
    fn list_for_entity(&self, entity_type: EntityKind, entity_id: &str) -> Vec<FieldVerification>;
    /// Entries for one verification, newest-first; equal timestamps order
    /// last-inserted-first.
    fn logs_for(&self, verification_id: Uuid) -> Vec<VerificationAuditLog>;
    fn commit(&mut self, record: FieldVerification, entry: VerificationAuditLog) -> Result<()>;
    fn commit_many(
        &mut self,
        records: Vec<FieldVerification>,
        entries: Vec<VerificationAuditLog>,
    ) -> Result<()>;
}
