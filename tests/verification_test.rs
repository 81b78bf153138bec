use recruitment_core::models::audit_log::AuditAction;
use recruitment_core::models::verification::{EntityKind, VerificationStatus};
use recruitment_core::services::verification_service::VerificationService;
use recruitment_core::store::memory::InMemoryVerificationStore;
use recruitment_core::utils::field_path::FieldPath;

fn service() -> VerificationService<InMemoryVerificationStore> {
    VerificationService::new(InMemoryVerificationStore::new())
}

#[test]
fn unknown_field_reads_as_unverified_with_no_history() {
    let service = service();
    let city = FieldPath::root("city");

    assert!(service
        .get_verification(EntityKind::Candidate, "1", &city)
        .is_none());
    assert!(service.history(EntityKind::Candidate, "1", &city).is_empty());

    let progress = service.section_progress(EntityKind::Candidate, "1", &[city]);
    assert_eq!((progress.verified, progress.total, progress.percentage), (0, 1, 0));
}

#[test]
fn first_write_defaults_to_unverified_unless_verifying() {
    let mut service = service();
    let name = FieldPath::root("name");
    let email = FieldPath::root("email");

    let plain = service
        .set_field_value(EntityKind::Candidate, "1", &name, Some("Ayesha".into()), false, None)
        .unwrap();
    assert_eq!(plain.status, VerificationStatus::Unverified);
    assert!(plain.verified_at.is_none());

    let verified = service
        .set_field_value(EntityKind::Candidate, "1", &email, Some("a@x.pk".into()), true, None)
        .unwrap();
    assert_eq!(verified.status, VerificationStatus::Verified);
    assert!(verified.verified_at.is_some());
}

#[test]
fn repeated_writes_keep_exactly_one_record_per_field() {
    let mut service = service();
    let email = FieldPath::root("email");

    for value in ["a@x.pk", "b@x.pk", "c@x.pk"] {
        service
            .set_field_value(EntityKind::Candidate, "1", &email, Some(value.into()), false, None)
            .unwrap();
    }
    service
        .toggle_verified(EntityKind::Candidate, "1", &email, None)
        .unwrap();

    assert_eq!(service.store().record_count(), 1);
    let record = service
        .get_verification(EntityKind::Candidate, "1", &email)
        .unwrap();
    assert_eq!(record.current_value.as_deref(), Some("c@x.pk"));
}

#[test]
fn verify_then_toggle_ends_unverified_with_newest_first_history() {
    let mut service = service();
    let email = FieldPath::root("email");

    service
        .set_field_value(EntityKind::Candidate, "1", &email, Some("new@x.com".into()), true, None)
        .unwrap();
    service
        .toggle_verified(EntityKind::Candidate, "1", &email, None)
        .unwrap();

    let record = service
        .get_verification(EntityKind::Candidate, "1", &email)
        .unwrap();
    assert_eq!(record.status, VerificationStatus::Unverified);
    assert_eq!(record.current_value.as_deref(), Some("new@x.com"));

    let history = service.history(EntityKind::Candidate, "1", &email);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, AuditAction::StatusChange);
    assert_eq!(history[0].old_status, Some(VerificationStatus::Verified));
    assert_eq!(history[0].new_status, Some(VerificationStatus::Unverified));
    assert_eq!(history[1].action, AuditAction::ValueUpdate);
    assert_eq!(history[1].new_value.as_deref(), Some("new@x.com"));
    assert_eq!(history[1].new_status, Some(VerificationStatus::Verified));
}

#[test]
fn editing_does_not_silently_unverify() {
    let mut service = service();
    let email = FieldPath::root("email");

    service
        .set_field_value(EntityKind::Candidate, "1", &email, Some("a@x.pk".into()), true, None)
        .unwrap();
    let edited = service
        .set_field_value(EntityKind::Candidate, "1", &email, Some("b@x.pk".into()), false, None)
        .unwrap();

    assert_eq!(edited.status, VerificationStatus::Verified);
    let history = service.history(EntityKind::Candidate, "1", &email);
    // the plain edit records values only, no status movement
    assert_eq!(history[0].action, AuditAction::ValueUpdate);
    assert_eq!(history[0].old_status, None);
    assert_eq!(history[0].old_value.as_deref(), Some("a@x.pk"));
    assert_eq!(history[0].new_value.as_deref(), Some("b@x.pk"));
}

#[test]
fn audit_log_only_grows_and_stays_sorted() {
    let mut service = service();
    let city = FieldPath::root("city");

    let mut seen = 0;
    for (value, verify) in [("Lahore", false), ("Karachi", true), ("Multan", false)] {
        service
            .set_field_value(EntityKind::Candidate, "1", &city, Some(value.into()), verify, None)
            .unwrap();
        let history = service.history(EntityKind::Candidate, "1", &city);
        assert!(history.len() > seen);
        seen = history.len();
        assert!(history.windows(2).all(|w| w[0].changed_at >= w[1].changed_at));
    }
    assert_eq!(seen, 3);
}

#[test]
fn toggling_a_never_written_field_starts_from_unverified() {
    let mut service = service();
    let path: FieldPath = "workExperiences[0].employerName".parse().unwrap();

    let record = service
        .toggle_verified(EntityKind::Candidate, "9", &path, None)
        .unwrap();
    assert_eq!(record.status, VerificationStatus::Verified);
    assert!(record.current_value.is_none());
    assert_eq!(record.field_name, "workExperiences[0].employerName");
}

#[test]
fn bulk_verify_settles_every_named_field() {
    let mut service = service();
    let fields: Vec<FieldPath> = vec![
        "educations[0].degreeName".parse().unwrap(),
        "educations[0].majorName".parse().unwrap(),
        "educations[0].grades".parse().unwrap(),
    ];

    // one of the three is already verified
    service
        .set_field_value(
            EntityKind::Candidate,
            "1",
            &fields[0],
            Some("BSCS".into()),
            true,
            None,
        )
        .unwrap();

    let changed = service
        .bulk_set_verified(EntityKind::Candidate, "1", &fields, true, None)
        .unwrap();
    assert_eq!(changed, 2);

    let progress = service.section_progress(EntityKind::Candidate, "1", &fields);
    assert_eq!((progress.verified, progress.total, progress.percentage), (3, 3, 100));

    let reverted = service
        .bulk_set_verified(EntityKind::Candidate, "1", &fields, false, None)
        .unwrap();
    assert_eq!(reverted, 3);
    let progress = service.section_progress(EntityKind::Candidate, "1", &fields);
    assert_eq!((progress.verified, progress.percentage), (0, 0));
}

#[test]
fn progress_percentage_stays_in_bounds() {
    let mut service = service();
    let fields: Vec<FieldPath> = vec![
        FieldPath::root("name"),
        FieldPath::root("city"),
        FieldPath::root("email"),
    ];

    let empty = service.section_progress(EntityKind::Candidate, "1", &[]);
    assert_eq!((empty.total, empty.percentage), (0, 0));

    service
        .set_field_value(EntityKind::Candidate, "1", &fields[0], Some("A".into()), true, None)
        .unwrap();
    let partial = service.section_progress(EntityKind::Candidate, "1", &fields);
    assert_eq!((partial.verified, partial.total, partial.percentage), (1, 3, 33));

    service
        .bulk_set_verified(EntityKind::Candidate, "1", &fields, true, None)
        .unwrap();
    let full = service.section_progress(EntityKind::Candidate, "1", &fields);
    assert_eq!(full.percentage, 100);
}

#[test]
fn entity_progress_rolls_up_recorded_fields() {
    let mut service = service();
    service
        .set_field_value(EntityKind::Candidate, "1", &FieldPath::root("name"), Some("A".into()), true, None)
        .unwrap();
    service
        .set_field_value(EntityKind::Candidate, "1", &FieldPath::root("city"), Some("Lahore".into()), false, None)
        .unwrap();
    // a different entity does not leak in
    service
        .set_field_value(EntityKind::Project, "1", &FieldPath::root("name"), Some("P".into()), true, None)
        .unwrap();

    let progress = service.entity_progress(EntityKind::Candidate, "1");
    assert_eq!((progress.verified, progress.total, progress.percentage), (1, 2, 50));
}

#[test]
fn equal_timestamps_order_last_inserted_first() {
    use recruitment_core::models::audit_log::VerificationAuditLog;
    use recruitment_core::models::verification::{FieldVerification, VerificationSource};
    use recruitment_core::store::VerificationStore;
    use recruitment_core::utils::time::now;
    use uuid::Uuid;

    let mut store = InMemoryVerificationStore::new();
    let verification_id = Uuid::new_v4();
    let ts = now();
    let record = FieldVerification {
        id: verification_id,
        entity_type: EntityKind::Candidate,
        entity_id: "1".into(),
        field_name: "city".into(),
        current_value: None,
        status: VerificationStatus::Unverified,
        source: VerificationSource::ManualEntry,
        verified_by: None,
        verified_at: None,
        notes: None,
        created_at: ts,
        updated_at: ts,
    };
    let entry = |reason: &str| VerificationAuditLog {
        id: Uuid::new_v4(),
        verification_id,
        action: AuditAction::StatusChange,
        old_status: None,
        new_status: None,
        old_value: None,
        new_value: None,
        changed_by: None,
        changed_at: ts,
        reason: Some(reason.into()),
    };

    store.commit(record.clone(), entry("first")).unwrap();
    store.commit(record, entry("second")).unwrap();

    let logs = store.logs_for(verification_id);
    assert_eq!(logs[0].reason.as_deref(), Some("second"));
    assert_eq!(logs[1].reason.as_deref(), Some("first"));
}
