mod common;

use common::*;
use recruitment_core::config::Config;
use recruitment_core::dto::filter_dto::{initial_filters, CandidateFilters, TagsWithMinYears};
use recruitment_core::services::filter_service::{DateRange, FilterService, ReferenceData};
use recruitment_core::services::metrics_service::MetricsService;
use rust_decimal::Decimal;
use uuid::Uuid;

fn service() -> FilterService {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
    FilterService::new(Config::default(), ReferenceData::default())
}

fn ids(candidates: &[recruitment_core::models::candidate::Candidate]) -> Vec<Uuid> {
    candidates.iter().map(|c| c.id).collect()
}

#[test]
fn empty_filters_match_everything() {
    let list = vec![candidate("Ayesha"), candidate("Bilal"), candidate("Sara")];
    let expected = ids(&list);

    let out = service().filter_candidates(list, &initial_filters());
    assert_eq!(ids(&out), expected);
}

#[test]
fn filtering_is_idempotent_and_order_preserving() {
    let mut a = candidate("Ayesha");
    a.city = Some("Lahore".into());
    let mut b = candidate("Bilal");
    b.city = Some("Karachi".into());
    let mut c = candidate("Sara");
    c.city = Some("Lahore".into());
    let expected = vec![a.id, c.id];

    let filters = CandidateFilters {
        cities: vec!["Lahore".into()],
        ..Default::default()
    };

    let svc = service();
    let once = svc.filter_candidates(vec![a, b, c], &filters);
    assert_eq!(ids(&once), expected);

    let twice = svc.filter_candidates(once.clone(), &filters);
    assert_eq!(ids(&twice), ids(&once));
}

#[test]
fn criteria_compose_by_intersection() {
    let mut a = candidate("Ayesha");
    a.city = Some("Lahore".into());
    a.is_top_developer = true;
    let mut b = candidate("Bilal");
    b.city = Some("Lahore".into());
    let mut c = candidate("Sara");
    c.city = Some("Karachi".into());
    c.is_top_developer = true;
    let list = vec![a.clone(), b.clone(), c.clone()];

    let city_only = CandidateFilters {
        cities: vec!["Lahore".into()],
        ..Default::default()
    };
    let top_only = CandidateFilters {
        is_top_developer: Some(true),
        ..Default::default()
    };
    let merged = CandidateFilters {
        cities: vec!["Lahore".into()],
        is_top_developer: Some(true),
        ..Default::default()
    };

    let svc = service();
    let by_city: Vec<Uuid> = ids(&svc.filter_candidates(list.clone(), &city_only));
    let by_top: Vec<Uuid> = ids(&svc.filter_candidates(list.clone(), &top_only));
    let both = ids(&svc.filter_candidates(list, &merged));

    let intersection: Vec<Uuid> = by_city
        .iter()
        .filter(|id| by_top.contains(id))
        .copied()
        .collect();
    assert_eq!(both, intersection);
    assert_eq!(both, vec![a.id]);
}

#[test]
fn exclusion_wins_over_inclusion() {
    let mut a = candidate("Ayesha");
    a.city = Some("Lahore".into());

    let filters = CandidateFilters {
        cities: vec!["Lahore".into()],
        exclude_cities: vec!["lahore".into()],
        ..Default::default()
    };
    assert!(service().filter_candidates(vec![a], &filters).is_empty());
}

#[test]
fn salary_range_bounds_are_inclusive() {
    let mut a = candidate("Ayesha");
    a.current_salary = Some(Decimal::from(1_050_000i64));
    let list = vec![a];

    let svc = service();
    let in_range = CandidateFilters {
        current_salary_min: Some("1000000".into()),
        current_salary_max: Some("1100000".into()),
        ..Default::default()
    };
    assert_eq!(svc.filter_candidates(list.clone(), &in_range).len(), 1);

    let capped = CandidateFilters {
        current_salary_max: Some("1000000".into()),
        ..Default::default()
    };
    assert!(svc.filter_candidates(list, &capped).is_empty());
}

#[test]
fn missing_salary_fails_an_active_range() {
    let filters = CandidateFilters {
        current_salary_min: Some("1".into()),
        ..Default::default()
    };
    assert!(service()
        .filter_candidates(vec![candidate("Ayesha")], &filters)
        .is_empty());
}

#[test]
fn unparseable_bound_leaves_filter_inert() {
    let filters = CandidateFilters {
        current_salary_min: Some("a lot".into()),
        ..Default::default()
    };
    assert_eq!(
        service()
            .filter_candidates(vec![candidate("Ayesha")], &filters)
            .len(),
        1
    );
}

#[test]
fn basic_info_search_spans_identity_fields() {
    let mut a = candidate("Ayesha Khan");
    a.email = Some("ayesha@devs.pk".into());
    let mut b = candidate("Bilal Malik");
    b.mobile_no = Some("0300-1234567".into());
    let list = vec![a.clone(), b.clone()];

    let svc = service();
    let by_email = CandidateFilters {
        basic_info_search: Some("devs.pk".into()),
        ..Default::default()
    };
    assert_eq!(ids(&svc.filter_candidates(list.clone(), &by_email)), vec![a.id]);

    let by_mobile = CandidateFilters {
        basic_info_search: Some("1234567".into()),
        ..Default::default()
    };
    assert_eq!(ids(&svc.filter_candidates(list, &by_mobile)), vec![b.id]);
}

#[test]
fn tech_stack_or_and_and_in_both_semantics() {
    let mut a = candidate("Ayesha");
    let mut exp = experience("Acme", "Engineer", Some(d(2020, 1, 1)), Some(d(2022, 1, 1)));
    exp.tech_stacks = vec!["Rust".into()];
    a.work_experiences = vec![exp];
    a.projects = vec![project("side", &["Go"], false)];
    let list = vec![a];

    let svc = service();
    let base = CandidateFilters {
        candidate_tech_stacks: vec!["rust".into(), "go".into()],
        ..Default::default()
    };

    // OR over the union
    assert_eq!(svc.filter_candidates(list.clone(), &base).len(), 1);

    // AND over the union still passes: one tag per side
    let require_all = CandidateFilters {
        candidate_tech_stacks_require_all: true,
        ..base.clone()
    };
    assert_eq!(svc.filter_candidates(list.clone(), &require_all).len(), 1);

    // AND within both sides independently fails: work has no Go
    let in_both = CandidateFilters {
        candidate_tech_stacks_require_in_both: true,
        ..require_all
    };
    assert!(svc.filter_candidates(list, &in_both).is_empty());
}

#[test]
fn tech_stack_years_threshold() {
    let mut a = candidate("Ayesha");
    let mut exp = experience("Acme", "Engineer", Some(d(2019, 1, 1)), Some(d(2022, 1, 1)));
    exp.tech_stacks = vec!["Rust".into()];
    a.work_experiences = vec![exp];
    let list = vec![a];

    let svc = service();
    let reachable = CandidateFilters {
        tech_stack_min_years: Some(TagsWithMinYears {
            tags: vec!["rust".into()],
            min_years: Some(2.0),
        }),
        ..Default::default()
    };
    assert_eq!(svc.filter_candidates(list.clone(), &reachable).len(), 1);

    let too_high = CandidateFilters {
        tech_stack_min_years: Some(TagsWithMinYears {
            tags: vec!["rust".into()],
            min_years: Some(4.0),
        }),
        ..Default::default()
    };
    assert!(svc.filter_candidates(list, &too_high).is_empty());
}

#[test]
fn years_of_experience_and_average_tenure() {
    let mut a = candidate("Ayesha");
    a.work_experiences = vec![
        experience("Acme", "Engineer", Some(d(2020, 1, 1)), Some(d(2022, 1, 1))),
        experience("Globex", "Engineer", Some(d(2021, 1, 1)), Some(d(2022, 1, 1))),
    ];
    let today = d(2024, 1, 1);
    assert_eq!(MetricsService::years_of_experience(&a, today), Some(3.0));
    assert_eq!(MetricsService::average_job_tenure(&a, today), Some(1.5));

    let svc = service();
    let filters = CandidateFilters {
        years_of_experience_min: Some("2.5".into()),
        years_of_experience_max: Some("3.5".into()),
        avg_job_tenure_min: Some("1.2".into()),
        ..Default::default()
    };
    assert_eq!(svc.filter_candidates(vec![a], &filters).len(), 1);
}

#[test]
fn promotions_count_distinct_titles_per_employer() {
    let mut a = candidate("Ayesha");
    a.work_experiences = vec![
        experience("Acme Inc", "Engineer", Some(d(2019, 1, 1)), Some(d(2021, 1, 1))),
        experience("Acme Inc", "Senior Engineer", Some(d(2021, 1, 2)), Some(d(2023, 1, 1))),
    ];
    assert_eq!(MetricsService::employer_promotions(&a, "Acme Inc"), 1);

    let filters = CandidateFilters {
        was_promoted: Some(true),
        promotions_min: Some("1".into()),
        ..Default::default()
    };
    assert_eq!(service().filter_candidates(vec![a], &filters).len(), 1);
}

#[test]
fn career_transition_requires_order_and_latest_flag() {
    let mut a = candidate("Ayesha");
    let mut from_exp = experience("SoftHouse", "Engineer", Some(d(2019, 1, 1)), Some(d(2020, 12, 31)));
    from_exp.employer_type = Some("service".into());
    let mut to_exp = experience("ProductCo", "Engineer", Some(d(2021, 1, 1)), Some(d(2022, 1, 1)));
    to_exp.employer_type = Some("product".into());
    let mut back_exp = experience("AgencyX", "Engineer", Some(d(2022, 2, 1)), None);
    back_exp.employer_type = Some("service".into());
    a.work_experiences = vec![from_exp, to_exp, back_exp];
    let list = vec![a];

    let svc = service();
    let transition = CandidateFilters {
        career_transition_from: vec!["service".into()],
        career_transition_to: vec!["product".into()],
        ..Default::default()
    };
    assert_eq!(svc.filter_candidates(list.clone(), &transition).len(), 1);

    // the most recent experience is back in a service shop
    let latest_only = CandidateFilters {
        career_transition_to_must_be_latest: true,
        ..transition
    };
    assert!(svc.filter_candidates(list, &latest_only).is_empty());
}

#[test]
fn worked_with_top_developer_within_window() {
    let mut top = candidate("Tariq");
    top.is_top_developer = true;
    top.work_experiences = vec![experience("Acme", "Staff Engineer", Some(d(2020, 1, 1)), None)];

    let mut near = candidate("Ayesha");
    near.work_experiences = vec![experience("acme", "Engineer", Some(d(2020, 1, 20)), None)];

    let mut late = candidate("Bilal");
    late.work_experiences = vec![experience("Acme", "Engineer", Some(d(2020, 6, 1)), None)];

    let filters = CandidateFilters {
        worked_with_top_developer: Some(true),
        ..Default::default()
    };
    let out = service().filter_candidates(vec![top, near.clone(), late], &filters);
    assert_eq!(ids(&out), vec![near.id]);
}

#[test]
fn joined_project_from_start_uses_reference_dates() {
    let reference = ReferenceData {
        project_start_dates: [("Phoenix".to_string(), d(2021, 3, 1))].into_iter().collect(),
        ..Default::default()
    };
    let svc = FilterService::new(Config::default(), reference);

    let mut early = candidate("Ayesha");
    let mut exp = experience("Acme", "Engineer", Some(d(2021, 3, 15)), None);
    exp.projects = vec![project_experience("Phoenix")];
    early.work_experiences = vec![exp];

    let mut late = candidate("Bilal");
    let mut exp = experience("Acme", "Engineer", Some(d(2021, 6, 1)), None);
    exp.projects = vec![project_experience("Phoenix")];
    late.work_experiences = vec![exp];

    let filters = CandidateFilters {
        joined_project_from_start: vec!["phoenix".into()],
        ..Default::default()
    };
    let out = svc.filter_candidates(vec![early.clone(), late], &filters);
    assert_eq!(ids(&out), vec![early.id]);
}

#[test]
fn mutual_connection_overlaps_with_month_tolerance() {
    let reference = ReferenceData {
        employee_educations: vec![DateRange {
            start: d(2015, 9, 1),
            end: Some(d(2019, 6, 1)),
        }],
        ..Default::default()
    };
    let svc = FilterService::new(Config::default(), reference);

    let mut adjacent = candidate("Ayesha");
    let mut edu = education("NUST", "BSCS");
    edu.start_month = Some(d(2019, 7, 1));
    edu.end_month = Some(d(2023, 6, 1));
    adjacent.educations = vec![edu];

    let mut distant = candidate("Bilal");
    let mut edu = education("NUST", "BSCS");
    edu.start_month = Some(d(2021, 9, 1));
    edu.end_month = None;
    distant.educations = vec![edu];

    let filters = CandidateFilters {
        has_mutual_connection: Some(true),
        ..Default::default()
    };
    let out = svc.filter_candidates(vec![adjacent.clone(), distant], &filters);
    assert_eq!(ids(&out), vec![adjacent.id]);
}

#[test]
fn education_and_certification_families() {
    let mut a = candidate("Ayesha");
    a.educations = vec![education("FAST Lahore", "BSCS")];
    a.certifications = vec![certification("AWS SAA", Some(d(2023, 5, 1)), Some(d(2035, 5, 1)))];
    let mut b = candidate("Bilal");
    b.certifications = vec![certification("AWS SAA", Some(d(2018, 5, 1)), Some(d(2021, 5, 1)))];
    let list = vec![a.clone(), b];

    let svc = service();
    let by_degree = CandidateFilters {
        degrees: vec!["bscs".into()],
        ..Default::default()
    };
    assert_eq!(ids(&svc.filter_candidates(list.clone(), &by_degree)), vec![a.id]);

    let active_cert = CandidateFilters {
        has_active_certification: Some(true),
        ..Default::default()
    };
    assert_eq!(ids(&svc.filter_candidates(list, &active_cert)), vec![a.id]);
}

#[test]
fn currently_working_tri_state() {
    let mut working = candidate("Ayesha");
    working.work_experiences = vec![experience("Acme", "Engineer", Some(d(2022, 1, 1)), None)];
    let mut idle = candidate("Bilal");
    idle.work_experiences =
        vec![experience("Acme", "Engineer", Some(d(2020, 1, 1)), Some(d(2021, 1, 1)))];
    let list = vec![working.clone(), idle.clone()];

    let svc = service();
    let on = CandidateFilters {
        is_currently_working: Some(true),
        ..Default::default()
    };
    assert_eq!(ids(&svc.filter_candidates(list.clone(), &on)), vec![working.id]);

    let off = CandidateFilters {
        is_currently_working: Some(false),
        ..Default::default()
    };
    assert_eq!(ids(&svc.filter_candidates(list, &off)), vec![idle.id]);
}
