use crate::models::candidate::{BenefitUnit, CandidateStatus, ShiftType, WorkMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Draft criteria collected by the filter dialog. Every field is optional;
/// an unset field constrains nothing. Numeric bounds arrive as raw strings
/// from the form inputs — an unparseable bound leaves that bound inert.
///
/// The dialog builds a fresh draft from `initial_filters()`, mutates it,
/// and commits it atomically on Apply (or discards it on Cancel).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilters {
    // ── Basic info ──
    pub basic_info_search: Option<String>,
    pub cities: Vec<String>,
    pub exclude_cities: Vec<String>,
    pub statuses: Vec<CandidateStatus>,
    pub sources: Vec<String>,
    pub posting_titles: Vec<String>,
    pub personality_types: Vec<String>,
    pub is_top_developer: Option<bool>,
    pub has_linkedin_url: Option<bool>,
    pub has_github_url: Option<bool>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
    pub updated_after: Option<NaiveDate>,
    pub updated_before: Option<NaiveDate>,

    // ── Salary ──
    pub current_salary_min: Option<String>,
    pub current_salary_max: Option<String>,
    pub expected_salary_min: Option<String>,
    pub expected_salary_max: Option<String>,

    // ── Work experience ──
    pub employers: Vec<String>,
    pub exclude_employers: Vec<String>,
    pub job_titles: Vec<String>,
    pub employer_types: Vec<String>,
    pub candidate_tech_stacks: Vec<String>,
    /// OR across the selected stacks by default; `true` flips to AND.
    pub candidate_tech_stacks_require_all: bool,
    /// Require the stack match to hold within work experiences AND within
    /// standalone projects independently, not just their union.
    pub candidate_tech_stacks_require_in_both: bool,
    pub exclude_tech_stacks: Vec<String>,
    pub domains: Vec<String>,
    pub domains_require_all: bool,
    pub shift_types: Vec<ShiftType>,
    pub work_modes: Vec<WorkMode>,
    pub time_support_zones: Vec<String>,
    pub time_support_zones_require_all: bool,
    pub benefit_names: Vec<String>,
    pub benefit_units: Vec<BenefitUnit>,
    pub benefit_amount_min: Option<String>,
    pub benefit_amount_max: Option<String>,
    pub is_currently_working: Option<bool>,
    pub years_of_experience_min: Option<String>,
    pub years_of_experience_max: Option<String>,
    pub avg_job_tenure_min: Option<String>,
    pub avg_job_tenure_max: Option<String>,
    pub employer_count_min: Option<String>,
    pub employer_count_max: Option<String>,
    pub work_experience_count_min: Option<String>,
    pub work_experience_count_max: Option<String>,
    pub employer_size_min: Option<String>,
    pub employer_size_max: Option<String>,
    pub promotions_min: Option<String>,
    pub was_promoted: Option<bool>,
    pub tech_stack_min_years: Option<TagsWithMinYears>,
    pub work_mode_min_years: Option<TagsWithMinYears>,
    pub career_transition_from: Vec<String>,
    pub career_transition_to: Vec<String>,
    pub career_transition_to_must_be_latest: bool,
    pub has_mutual_connection: Option<bool>,
    pub mutual_connection_month_tolerance: Option<u32>,
    pub joined_project_from_start: Vec<String>,
    pub joined_project_tolerance_days: Option<i64>,
    pub worked_with_top_developer: Option<bool>,
    pub worked_with_top_developer_tolerance_days: Option<i64>,

    // ── Standalone projects ──
    pub project_names: Vec<String>,
    pub project_tech_stacks: Vec<String>,
    pub project_tech_stacks_require_all: bool,
    pub project_team_size_min: Option<String>,
    pub project_team_size_max: Option<String>,
    pub project_count_min: Option<String>,
    pub has_published_project: Option<bool>,
    pub project_search: Option<String>,

    // ── Education ──
    pub university_locations: Vec<String>,
    pub degrees: Vec<String>,
    pub majors: Vec<String>,
    pub grades_search: Option<String>,
    pub is_topper: Option<bool>,
    pub is_cheetah: Option<bool>,
    pub has_education: Option<bool>,
    pub education_started_after: Option<NaiveDate>,
    pub education_ended_before: Option<NaiveDate>,

    // ── Certifications ──
    pub certification_names: Vec<String>,
    pub has_certifications: Option<bool>,
    pub has_active_certification: Option<bool>,
    pub certification_issued_after: Option<NaiveDate>,
    pub certification_issued_before: Option<NaiveDate>,
    pub certification_expiring_before: Option<NaiveDate>,

    // ── Achievements ──
    pub achievement_search: Option<String>,
    pub has_achievements: Option<bool>,
}

/// Tag set bundled with a cumulative-years threshold: every named tag must
/// reach the threshold for the candidate to pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagsWithMinYears {
    pub tags: Vec<String>,
    pub min_years: Option<f64>,
}

impl TagsWithMinYears {
    pub fn is_set(&self) -> bool {
        !self.tags.is_empty() || self.min_years.is_some()
    }
}

/// The blank template each filter-dialog session starts from.
pub fn initial_filters() -> CandidateFilters {
    CandidateFilters::default()
}
