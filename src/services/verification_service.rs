use crate::error::Result;
use crate::models::audit_log::{AuditAction, VerificationAuditLog};
use crate::models::verification::{
    EntityKind, FieldVerification, SectionProgress, VerificationSource, VerificationStatus,
};
use crate::store::{VerificationKey, VerificationStore};
use crate::utils::field_path::FieldPath;
use crate::utils::time;
use tracing::info;
use uuid::Uuid;

/// Field-level verification tracker: one upsertable record per field path,
/// an append-only audit trail, and progress rollups recomputed on every
/// read. A field that was never written reads as unverified with no
/// history.
pub struct VerificationService<S: VerificationStore> {
    store: S,
}

impl<S: VerificationStore> VerificationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_verification(
        &self,
        entity_type: EntityKind,
        entity_id: &str,
        field: &FieldPath,
    ) -> Option<FieldVerification> {
        self.store
            .get(&VerificationKey::new(entity_type, entity_id, field))
    }

    /// Upserts the field's current value. With `verify`, the record also
    /// moves to verified under the acting user; without it the status is
    /// left untouched — editing never silently unverifies. Exactly one
    /// audit entry lands with the record, atomically.
    pub fn set_field_value(
        &mut self,
        entity_type: EntityKind,
        entity_id: &str,
        field: &FieldPath,
        new_value: Option<String>,
        verify: bool,
        actor: Option<Uuid>,
    ) -> Result<FieldVerification> {
        let key = VerificationKey::new(entity_type, entity_id, field);
        let now = time::now();

        let (record, old_value, old_status) = match self.store.get(&key) {
            Some(mut record) => {
                let old_value = record.current_value.clone();
                let old_status = record.status;
                record.current_value = new_value.clone();
                if verify {
                    record.status = VerificationStatus::Verified;
                    record.verified_by = actor;
                    record.verified_at = Some(now);
                }
                record.updated_at = now;
                (record, old_value, old_status)
            }
            None => {
                let status = if verify {
                    VerificationStatus::Verified
                } else {
                    VerificationStatus::Unverified
                };
                let record = FieldVerification {
                    id: Uuid::new_v4(),
                    entity_type,
                    entity_id: entity_id.to_string(),
                    field_name: field.to_string(),
                    current_value: new_value.clone(),
                    status,
                    source: VerificationSource::ManualEntry,
                    verified_by: if verify { actor } else { None },
                    verified_at: verify.then_some(now),
                    notes: None,
                    created_at: now,
                    updated_at: now,
                };
                // a never-written field reads as unverified
                (record, None, VerificationStatus::Unverified)
            }
        };

        let status_changed = record.status != old_status;
        let entry = VerificationAuditLog {
            id: Uuid::new_v4(),
            verification_id: record.id,
            action: AuditAction::ValueUpdate,
            old_status: status_changed.then_some(old_status),
            new_status: status_changed.then_some(record.status),
            old_value,
            new_value,
            changed_by: actor,
            changed_at: now,
            reason: None,
        };

        self.store.commit(record.clone(), entry)?;
        info!(
            entity_id,
            field = %field,
            verified = verify,
            "field value updated"
        );
        Ok(record)
    }

    /// Flips verified⇄unverified without touching the current value.
    /// Toggling a never-written field starts from the unverified default.
    pub fn toggle_verified(
        &mut self,
        entity_type: EntityKind,
        entity_id: &str,
        field: &FieldPath,
        actor: Option<Uuid>,
    ) -> Result<FieldVerification> {
        let key = VerificationKey::new(entity_type, entity_id, field);
        let now = time::now();

        let mut record = self.store.get(&key).unwrap_or_else(|| FieldVerification {
            id: Uuid::new_v4(),
            entity_type,
            entity_id: entity_id.to_string(),
            field_name: field.to_string(),
            current_value: None,
            status: VerificationStatus::Unverified,
            source: VerificationSource::ManualEntry,
            verified_by: None,
            verified_at: None,
            notes: None,
            created_at: now,
            updated_at: now,
        });

        let old_status = record.status;
        let new_status = match old_status {
            VerificationStatus::Verified => VerificationStatus::Unverified,
            VerificationStatus::Unverified => VerificationStatus::Verified,
        };
        record.status = new_status;
        match new_status {
            VerificationStatus::Verified => {
                record.verified_by = actor;
                record.verified_at = Some(now);
            }
            VerificationStatus::Unverified => {
                record.verified_by = None;
                record.verified_at = None;
            }
        }
        record.updated_at = now;

        let entry = VerificationAuditLog {
            id: Uuid::new_v4(),
            verification_id: record.id,
            action: AuditAction::StatusChange,
            old_status: Some(old_status),
            new_status: Some(new_status),
            old_value: None,
            new_value: None,
            changed_by: actor,
            changed_at: now,
            reason: None,
        };

        self.store.commit(record.clone(), entry)?;
        Ok(record)
    }

    /// "Verify All" for a section: every named field ends in the requested
    /// state, in one atomic write. Fields already there are untouched and
    /// produce no audit entry. Returns the number of fields changed.
    pub fn bulk_set_verified(
        &mut self,
        entity_type: EntityKind,
        entity_id: &str,
        fields: &[FieldPath],
        verified: bool,
        actor: Option<Uuid>,
    ) -> Result<usize> {
        let now = time::now();
        let target = if verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Unverified
        };

        let mut records = Vec::new();
        let mut entries = Vec::new();
        for field in fields {
            let key = VerificationKey::new(entity_type, entity_id, field);
            let record = match self.store.get(&key) {
                Some(record) if record.status == target => continue,
                Some(mut record) => {
                    record.status = target;
                    if verified {
                        record.verified_by = actor;
                        record.verified_at = Some(now);
                    } else {
                        record.verified_by = None;
                        record.verified_at = None;
                    }
                    record.updated_at = now;
                    record
                }
                // absent records already read as unverified
                None if !verified => continue,
                None => FieldVerification {
                    id: Uuid::new_v4(),
                    entity_type,
                    entity_id: entity_id.to_string(),
                    field_name: field.to_string(),
                    current_value: None,
                    status: VerificationStatus::Verified,
                    source: VerificationSource::ManualEntry,
                    verified_by: actor,
                    verified_at: Some(now),
                    notes: None,
                    created_at: now,
                    updated_at: now,
                },
            };

            entries.push(VerificationAuditLog {
                id: Uuid::new_v4(),
                verification_id: record.id,
                action: AuditAction::StatusChange,
                old_status: Some(match target {
                    VerificationStatus::Verified => VerificationStatus::Unverified,
                    VerificationStatus::Unverified => VerificationStatus::Verified,
                }),
                new_status: Some(target),
                old_value: None,
                new_value: None,
                changed_by: actor,
                changed_at: now,
                reason: None,
            });
            records.push(record);
        }

        let changed = records.len();
        self.store.commit_many(records, entries)?;
        info!(entity_id, changed, verified, "bulk verification applied");
        Ok(changed)
    }

    /// Pure rollup over the named fields, recomputed on every call.
    pub fn section_progress(
        &self,
        entity_type: EntityKind,
        entity_id: &str,
        fields: &[FieldPath],
    ) -> SectionProgress {
        let total = fields.len();
        let verified = fields
            .iter()
            .filter(|field| {
                self.store
                    .get(&VerificationKey::new(entity_type, entity_id, field))
                    .is_some_and(|r| r.status == VerificationStatus::Verified)
            })
            .count();
        SectionProgress::of(verified, total)
    }

    /// Rollup across every field ever recorded for the entity.
    pub fn entity_progress(&self, entity_type: EntityKind, entity_id: &str) -> SectionProgress {
        let records = self.store.list_for_entity(entity_type, entity_id);
        let verified = records
            .iter()
            .filter(|r| r.status == VerificationStatus::Verified)
            .count();
        SectionProgress::of(verified, records.len())
    }

    /// Audit entries for the field's current verification, newest-first.
    /// A never-written field has no history.
    pub fn history(
        &self,
        entity_type: EntityKind,
        entity_id: &str,
        field: &FieldPath,
    ) -> Vec<VerificationAuditLog> {
        match self.get_verification(entity_type, entity_id, field) {
            Some(record) => self.store.logs_for(record.id),
            None => Vec::new(),
        }
    }
}
