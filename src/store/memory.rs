use crate::error::Result;
use crate::models::audit_log::VerificationAuditLog;
use crate::models::candidate::Candidate;
use crate::models::verification::{EntityKind, FieldVerification};
use crate::store::{CandidateStore, VerificationKey, VerificationStore};
use crate::utils::text::eq_ci;
use std::collections::HashMap;
use uuid::Uuid;

/// Candidate storage backed by a plain vector, insertion order preserved.
#[derive(Debug, Default)]
pub struct InMemoryCandidateStore {
    candidates: Vec<Candidate>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl CandidateStore for InMemoryCandidateStore {
    fn get(&self, id: Uuid) -> Option<Candidate> {
        self.candidates.iter().find(|c| c.id == id).cloned()
    }

    fn list(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }

    fn find_by_email(&self, email: &str) -> Option<Candidate> {
        self.candidates
            .iter()
            .find(|c| c.email.as_deref().is_some_and(|e| eq_ci(e, email)))
            .cloned()
    }

    fn find_by_mobile(&self, mobile: &str) -> Option<Candidate> {
        self.candidates
            .iter()
            .find(|c| c.mobile_no.as_deref() == Some(mobile))
            .cloned()
    }

    fn upsert(&mut self, candidate: Candidate) -> Result<()> {
        match self.candidates.iter_mut().find(|c| c.id == candidate.id) {
            Some(slot) => *slot = candidate,
            None => self.candidates.push(candidate),
        }
        Ok(())
    }
}

/// Verification storage: one record per key, audit log kept in insertion
/// order so timestamp ties resolve to last-inserted-first on read.
#[derive(Debug, Default)]
pub struct InMemoryVerificationStore {
    records: HashMap<VerificationKey, FieldVerification>,
    logs: Vec<VerificationAuditLog>,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn log_count(&self) -> usize {
        self.logs.len()
    }
}

impl VerificationStore for InMemoryVerificationStore {
    fn get(&self, key: &VerificationKey) -> Option<FieldVerification> {
        self.records.get(key).cloned()
    }

    fn list_for_entity(&self, entity_type: EntityKind, entity_id: &str) -> Vec<FieldVerification> {
        let mut found: Vec<FieldVerification> = self
            .records
            .values()
            .filter(|r| r.entity_type == entity_type && r.entity_id == entity_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.field_name.cmp(&b.field_name));
        found
    }

    fn logs_for(&self, verification_id: Uuid) -> Vec<VerificationAuditLog> {
        let mut entries: Vec<VerificationAuditLog> = self
            .logs
            .iter()
            .filter(|l| l.verification_id == verification_id)
            .cloned()
            .collect();
        entries.reverse();
        // Stable sort over the reversed list keeps insertion-order ties
        // newest-inserted-first.
        entries.sort_by(|a, b| b.changed_at.cmp(&a.changed_at));
        entries
    }

    fn commit(&mut self, record: FieldVerification, entry: VerificationAuditLog) -> Result<()> {
        self.records.insert(VerificationKey::of_record(&record), record);
        self.logs.push(entry);
        Ok(())
    }

    fn commit_many(
        &mut self,
        records: Vec<FieldVerification>,
        entries: Vec<VerificationAuditLog>,
    ) -> Result<()> {
        for record in records {
            self.records.insert(VerificationKey::of_record(&record), record);
        }
        self.logs.extend(entries);
        Ok(())
    }
}
