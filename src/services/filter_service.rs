use crate::config::Config;
use crate::dto::filter_dto::CandidateFilters;
use crate::models::candidate::Candidate;
use crate::services::metrics_service::MetricsService;
use crate::utils::text::{contains_ci, eq_ci, norm};
use crate::utils::time::{joined_from_start, ranges_overlap, today};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// A start/end pair; `None` end means ongoing.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

/// External reference data consumed by the relationship filters: catalog
/// project start dates and in-house employee education/work date ranges.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub project_start_dates: HashMap<String, NaiveDate>,
    pub employee_employments: Vec<DateRange>,
    pub employee_educations: Vec<DateRange>,
}

/// Everything a single predicate evaluation may consult besides the
/// candidate and the criteria themselves.
pub struct FilterContext {
    pub today: NaiveDate,
    pub date_tolerance_days: i64,
    pub mutual_month_tolerance: u32,
    /// Normalized project name -> start date.
    pub project_start_dates: HashMap<String, NaiveDate>,
    pub employee_employments: Vec<DateRange>,
    pub employee_educations: Vec<DateRange>,
    /// (candidate id, normalized employer, start date) for every dated
    /// experience of a top-developer candidate in the evaluated list.
    pub top_developer_starts: Vec<(Uuid, String, NaiveDate)>,
}

#[derive(Clone)]
pub struct FilterService {
    config: Config,
    reference: ReferenceData,
}

impl FilterService {
    pub fn new(config: Config, reference: ReferenceData) -> Self {
        Self { config, reference }
    }

    /// Context for one evaluation pass. The top-developer employment index
    /// is derived from the list itself.
    pub fn build_context(&self, candidates: &[Candidate]) -> FilterContext {
        let mut top_developer_starts = Vec::new();
        for candidate in candidates.iter().filter(|c| c.is_top_developer) {
            for exp in &candidate.work_experiences {
                if let Some(start) = exp.start_date {
                    top_developer_starts.push((candidate.id, norm(&exp.employer_name), start));
                }
            }
        }

        FilterContext {
            today: today(),
            date_tolerance_days: self.config.date_tolerance_days,
            mutual_month_tolerance: self.config.mutual_connection_month_tolerance,
            project_start_dates: self
                .reference
                .project_start_dates
                .iter()
                .map(|(name, start)| (norm(name), *start))
                .collect(),
            employee_employments: self.reference.employee_employments.clone(),
            employee_educations: self.reference.employee_educations.clone(),
            top_developer_starts,
        }
    }

    /// Single linear pass; stable order preserved. An empty criteria object
    /// returns the list unchanged.
    pub fn filter_candidates(
        &self,
        candidates: Vec<Candidate>,
        filters: &CandidateFilters,
    ) -> Vec<Candidate> {
        let ctx = self.build_context(&candidates);
        let total = candidates.len();
        let matched: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| Self::matches_filters(c, filters, &ctx))
            .collect();
        debug!(total, matched = matched.len(), "filtered candidate list");
        matched
    }

    /// AND of every active criterion; unset criteria are vacuously true.
    /// Never panics: absent data resolves to a fail for the constraining
    /// filter, not an error.
    pub fn matches_filters(
        candidate: &Candidate,
        filters: &CandidateFilters,
        ctx: &FilterContext,
    ) -> bool {
        PREDICATES
            .iter()
            .filter(|p| (p.is_active)(filters))
            .all(|p| (p.matches)(candidate, filters, ctx))
    }

    /// Names of the predicate families the given criteria activate.
    pub fn active_predicates(filters: &CandidateFilters) -> Vec<&'static str> {
        PREDICATES
            .iter()
            .filter(|p| (p.is_active)(filters))
            .map(|p| p.name)
            .collect()
    }
}

/// One filter family: an activation check over the criteria and a match
/// check over a candidate. Families combine by AND; any OR/AND variation
/// lives inside a single family behind its companion flag.
struct Predicate {
    name: &'static str,
    is_active: fn(&CandidateFilters) -> bool,
    matches: fn(&Candidate, &CandidateFilters, &FilterContext) -> bool,
}

// ── Parsing helpers: an unparseable bound leaves that bound inert ──

fn parse_f64(raw: &Option<String>) -> Option<f64> {
    raw.as_deref().and_then(|s| s.trim().parse::<f64>().ok())
}

fn parse_usize(raw: &Option<String>) -> Option<usize> {
    raw.as_deref().and_then(|s| s.trim().parse::<usize>().ok())
}

fn parse_decimal(raw: &Option<String>) -> Option<Decimal> {
    raw.as_deref().and_then(|s| Decimal::from_str(s.trim()).ok())
}

fn f64_range_active(min: &Option<String>, max: &Option<String>) -> bool {
    parse_f64(min).is_some() || parse_f64(max).is_some()
}

fn usize_range_active(min: &Option<String>, max: &Option<String>) -> bool {
    parse_usize(min).is_some() || parse_usize(max).is_some()
}

fn decimal_range_active(min: &Option<String>, max: &Option<String>) -> bool {
    parse_decimal(min).is_some() || parse_decimal(max).is_some()
}

/// One-sided or two-sided bound check. A candidate without a value fails
/// any range that is set.
fn in_f64_range(value: Option<f64>, min: &Option<String>, max: &Option<String>) -> bool {
    let Some(v) = value else { return false };
    parse_f64(min).map_or(true, |m| v >= m) && parse_f64(max).map_or(true, |m| v <= m)
}

fn in_usize_range(value: Option<usize>, min: &Option<String>, max: &Option<String>) -> bool {
    let Some(v) = value else { return false };
    parse_usize(min).map_or(true, |m| v >= m) && parse_usize(max).map_or(true, |m| v <= m)
}

fn in_decimal_range(value: Option<Decimal>, min: &Option<String>, max: &Option<String>) -> bool {
    let Some(v) = value else { return false };
    parse_decimal(min).map_or(true, |m| v >= m) && parse_decimal(max).map_or(true, |m| v <= m)
}

// ── Set helpers, all case-insensitive ──

fn in_set(value: &str, selected: &[String]) -> bool {
    selected.iter().any(|s| eq_ci(s, value))
}

fn opt_in_set(value: Option<&str>, selected: &[String]) -> bool {
    value.is_some_and(|v| in_set(v, selected))
}

fn any_in_set<'a>(values: impl Iterator<Item = &'a str>, selected: &[String]) -> bool {
    let mut values = values;
    values.any(|v| in_set(v, selected))
}

/// OR by default, AND when `require_all`.
fn tag_set_matches(candidate_tags: &HashSet<String>, selected: &[String], require_all: bool) -> bool {
    if require_all {
        selected.iter().all(|s| candidate_tags.contains(&norm(s)))
    } else {
        selected.iter().any(|s| candidate_tags.contains(&norm(s)))
    }
}

// ── Derived candidate collections ──

fn work_stacks(c: &Candidate) -> HashSet<String> {
    c.work_experiences
        .iter()
        .flat_map(|e| e.tech_stacks.iter())
        .map(|s| norm(s))
        .collect()
}

fn project_stacks(c: &Candidate) -> HashSet<String> {
    c.projects
        .iter()
        .flat_map(|p| p.tech_stacks.iter())
        .map(|s| norm(s))
        .collect()
}

fn all_stacks(c: &Candidate) -> HashSet<String> {
    let mut stacks = work_stacks(c);
    stacks.extend(project_stacks(c));
    stacks
}

fn all_domains(c: &Candidate) -> HashSet<String> {
    c.work_experiences
        .iter()
        .flat_map(|e| e.domains.iter())
        .map(|s| norm(s))
        .collect()
}

fn all_time_zones(c: &Candidate) -> HashSet<String> {
    c.work_experiences
        .iter()
        .flat_map(|e| e.time_support_zones.iter())
        .map(|s| norm(s))
        .collect()
}

fn max_benefit_amount(c: &Candidate) -> Option<Decimal> {
    c.work_experiences
        .iter()
        .flat_map(|e| e.benefits.iter())
        .filter_map(|b| b.amount)
        .max()
}

fn max_employer_size(c: &Candidate) -> Option<i32> {
    c.work_experiences.iter().filter_map(|e| e.employer_size).max()
}

fn max_project_team_size(c: &Candidate) -> Option<i32> {
    c.projects.iter().filter_map(|p| p.team_size).max()
}

// ── Relationship checks ──

fn mutual_connection(c: &Candidate, f: &CandidateFilters, ctx: &FilterContext) -> bool {
    let tolerance = f
        .mutual_connection_month_tolerance
        .unwrap_or(ctx.mutual_month_tolerance);

    let education_hit = c.educations.iter().any(|e| {
        e.start_month.is_some_and(|start| {
            ctx.employee_educations
                .iter()
                .any(|r| ranges_overlap(start, e.end_month, r.start, r.end, tolerance))
        })
    });
    let work_hit = c.work_experiences.iter().any(|e| {
        e.start_date.is_some_and(|start| {
            ctx.employee_employments
                .iter()
                .any(|r| ranges_overlap(start, e.end_date, r.start, r.end, tolerance))
        })
    });
    education_hit || work_hit
}

fn joined_any_project_from_start(c: &Candidate, f: &CandidateFilters, ctx: &FilterContext) -> bool {
    let tolerance = f.joined_project_tolerance_days.unwrap_or(ctx.date_tolerance_days);
    f.joined_project_from_start.iter().any(|project| {
        let Some(reference_start) = ctx.project_start_dates.get(&norm(project)) else {
            return false;
        };
        c.work_experiences.iter().any(|exp| {
            exp.projects.iter().any(|p| eq_ci(&p.project_name, project))
                && exp
                    .start_date
                    .is_some_and(|start| joined_from_start(start, *reference_start, tolerance))
        })
    })
}

fn worked_with_top_developer(c: &Candidate, f: &CandidateFilters, ctx: &FilterContext) -> bool {
    let tolerance = f
        .worked_with_top_developer_tolerance_days
        .unwrap_or(ctx.date_tolerance_days);
    c.work_experiences.iter().any(|exp| {
        let Some(start) = exp.start_date else { return false };
        let employer = norm(&exp.employer_name);
        ctx.top_developer_starts.iter().any(|(id, top_employer, top_start)| {
            *id != c.id && *top_employer == employer && joined_from_start(start, *top_start, tolerance)
        })
    })
}

// ── The predicate table: AND across entries, one entry per family ──

static PREDICATES: &[Predicate] = &[
    Predicate {
        name: "basic_info_search",
        is_active: |f| f.basic_info_search.as_deref().is_some_and(|s| !s.trim().is_empty()),
        matches: |c, f, _| {
            let query = f.basic_info_search.as_deref().unwrap_or_default();
            let fields = [
                Some(c.name.as_str()),
                c.email.as_deref(),
                c.mobile_no.as_deref(),
                c.cnic.as_deref(),
                c.source.as_deref(),
                Some(c.status.as_str()),
                c.linkedin_url.as_deref(),
                c.github_url.as_deref(),
            ];
            fields.into_iter().flatten().any(|v| contains_ci(v, query))
        },
    },
    Predicate {
        name: "cities",
        is_active: |f| !f.cities.is_empty(),
        matches: |c, f, _| opt_in_set(c.city.as_deref(), &f.cities),
    },
    Predicate {
        name: "exclude_cities",
        is_active: |f| !f.exclude_cities.is_empty(),
        matches: |c, f, _| !opt_in_set(c.city.as_deref(), &f.exclude_cities),
    },
    Predicate {
        name: "statuses",
        is_active: |f| !f.statuses.is_empty(),
        matches: |c, f, _| f.statuses.contains(&c.status),
    },
    Predicate {
        name: "sources",
        is_active: |f| !f.sources.is_empty(),
        matches: |c, f, _| opt_in_set(c.source.as_deref(), &f.sources),
    },
    Predicate {
        name: "posting_titles",
        is_active: |f| !f.posting_titles.is_empty(),
        matches: |c, f, _| opt_in_set(c.posting_title.as_deref(), &f.posting_titles),
    },
    Predicate {
        name: "personality_types",
        is_active: |f| !f.personality_types.is_empty(),
        matches: |c, f, _| opt_in_set(c.personality_type.as_deref(), &f.personality_types),
    },
    Predicate {
        name: "is_top_developer",
        is_active: |f| f.is_top_developer.is_some(),
        matches: |c, f, _| f.is_top_developer == Some(c.is_top_developer),
    },
    Predicate {
        name: "has_linkedin_url",
        is_active: |f| f.has_linkedin_url.is_some(),
        matches: |c, f, _| {
            f.has_linkedin_url == Some(c.linkedin_url.as_deref().is_some_and(|u| !u.is_empty()))
        },
    },
    Predicate {
        name: "has_github_url",
        is_active: |f| f.has_github_url.is_some(),
        matches: |c, f, _| {
            f.has_github_url == Some(c.github_url.as_deref().is_some_and(|u| !u.is_empty()))
        },
    },
    Predicate {
        name: "created_window",
        is_active: |f| f.created_after.is_some() || f.created_before.is_some(),
        matches: |c, f, _| {
            let created = c.created_at.date_naive();
            f.created_after.map_or(true, |d| created >= d)
                && f.created_before.map_or(true, |d| created <= d)
        },
    },
    Predicate {
        name: "updated_window",
        is_active: |f| f.updated_after.is_some() || f.updated_before.is_some(),
        matches: |c, f, _| {
            let updated = c.updated_at.date_naive();
            f.updated_after.map_or(true, |d| updated >= d)
                && f.updated_before.map_or(true, |d| updated <= d)
        },
    },
    Predicate {
        name: "current_salary_range",
        is_active: |f| decimal_range_active(&f.current_salary_min, &f.current_salary_max),
        matches: |c, f, _| {
            in_decimal_range(c.current_salary, &f.current_salary_min, &f.current_salary_max)
        },
    },
    Predicate {
        name: "expected_salary_range",
        is_active: |f| decimal_range_active(&f.expected_salary_min, &f.expected_salary_max),
        matches: |c, f, _| {
            in_decimal_range(c.expected_salary, &f.expected_salary_min, &f.expected_salary_max)
        },
    },
    Predicate {
        name: "employers",
        is_active: |f| !f.employers.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.work_experiences.iter().map(|e| e.employer_name.as_str()),
                &f.employers,
            )
        },
    },
    Predicate {
        name: "exclude_employers",
        is_active: |f| !f.exclude_employers.is_empty(),
        matches: |c, f, _| {
            !any_in_set(
                c.work_experiences.iter().map(|e| e.employer_name.as_str()),
                &f.exclude_employers,
            )
        },
    },
    Predicate {
        name: "job_titles",
        is_active: |f| !f.job_titles.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.work_experiences.iter().map(|e| e.job_title.as_str()),
                &f.job_titles,
            )
        },
    },
    Predicate {
        name: "employer_types",
        is_active: |f| !f.employer_types.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.work_experiences
                    .iter()
                    .filter_map(|e| e.employer_type.as_deref()),
                &f.employer_types,
            )
        },
    },
    Predicate {
        name: "candidate_tech_stacks",
        is_active: |f| !f.candidate_tech_stacks.is_empty(),
        matches: |c, f, _| {
            if f.candidate_tech_stacks_require_in_both {
                tag_set_matches(&work_stacks(c), &f.candidate_tech_stacks, f.candidate_tech_stacks_require_all)
                    && tag_set_matches(
                        &project_stacks(c),
                        &f.candidate_tech_stacks,
                        f.candidate_tech_stacks_require_all,
                    )
            } else {
                tag_set_matches(&all_stacks(c), &f.candidate_tech_stacks, f.candidate_tech_stacks_require_all)
            }
        },
    },
    Predicate {
        name: "exclude_tech_stacks",
        is_active: |f| !f.exclude_tech_stacks.is_empty(),
        matches: |c, f, _| {
            let stacks = all_stacks(c);
            !f.exclude_tech_stacks.iter().any(|s| stacks.contains(&norm(s)))
        },
    },
    Predicate {
        name: "domains",
        is_active: |f| !f.domains.is_empty(),
        matches: |c, f, _| tag_set_matches(&all_domains(c), &f.domains, f.domains_require_all),
    },
    Predicate {
        name: "shift_types",
        is_active: |f| !f.shift_types.is_empty(),
        matches: |c, f, _| {
            c.work_experiences
                .iter()
                .filter_map(|e| e.shift_type)
                .any(|s| f.shift_types.contains(&s))
        },
    },
    Predicate {
        name: "work_modes",
        is_active: |f| !f.work_modes.is_empty(),
        matches: |c, f, _| {
            c.work_experiences
                .iter()
                .filter_map(|e| e.work_mode)
                .any(|m| f.work_modes.contains(&m))
        },
    },
    Predicate {
        name: "time_support_zones",
        is_active: |f| !f.time_support_zones.is_empty(),
        matches: |c, f, _| {
            tag_set_matches(&all_time_zones(c), &f.time_support_zones, f.time_support_zones_require_all)
        },
    },
    Predicate {
        name: "benefit_names",
        is_active: |f| !f.benefit_names.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.work_experiences
                    .iter()
                    .flat_map(|e| e.benefits.iter())
                    .map(|b| b.name.as_str()),
                &f.benefit_names,
            )
        },
    },
    Predicate {
        name: "benefit_units",
        is_active: |f| !f.benefit_units.is_empty(),
        matches: |c, f, _| {
            c.work_experiences
                .iter()
                .flat_map(|e| e.benefits.iter())
                .filter_map(|b| b.unit)
                .any(|u| f.benefit_units.contains(&u))
        },
    },
    Predicate {
        name: "benefit_amount_range",
        is_active: |f| decimal_range_active(&f.benefit_amount_min, &f.benefit_amount_max),
        matches: |c, f, _| {
            in_decimal_range(max_benefit_amount(c), &f.benefit_amount_min, &f.benefit_amount_max)
        },
    },
    Predicate {
        name: "is_currently_working",
        is_active: |f| f.is_currently_working.is_some(),
        matches: |c, f, _| f.is_currently_working == Some(MetricsService::is_currently_working(c)),
    },
    Predicate {
        name: "years_of_experience_range",
        is_active: |f| f64_range_active(&f.years_of_experience_min, &f.years_of_experience_max),
        matches: |c, f, ctx| {
            in_f64_range(
                MetricsService::years_of_experience(c, ctx.today),
                &f.years_of_experience_min,
                &f.years_of_experience_max,
            )
        },
    },
    Predicate {
        name: "avg_job_tenure_range",
        is_active: |f| f64_range_active(&f.avg_job_tenure_min, &f.avg_job_tenure_max),
        matches: |c, f, ctx| {
            in_f64_range(
                MetricsService::average_job_tenure(c, ctx.today),
                &f.avg_job_tenure_min,
                &f.avg_job_tenure_max,
            )
        },
    },
    Predicate {
        name: "employer_count_range",
        is_active: |f| usize_range_active(&f.employer_count_min, &f.employer_count_max),
        matches: |c, f, _| {
            in_usize_range(
                Some(MetricsService::distinct_employer_count(c)),
                &f.employer_count_min,
                &f.employer_count_max,
            )
        },
    },
    Predicate {
        name: "work_experience_count_range",
        is_active: |f| usize_range_active(&f.work_experience_count_min, &f.work_experience_count_max),
        matches: |c, f, _| {
            in_usize_range(
                Some(c.work_experiences.len()),
                &f.work_experience_count_min,
                &f.work_experience_count_max,
            )
        },
    },
    Predicate {
        name: "employer_size_range",
        is_active: |f| usize_range_active(&f.employer_size_min, &f.employer_size_max),
        matches: |c, f, _| {
            in_usize_range(
                max_employer_size(c).map(|s| s.max(0) as usize),
                &f.employer_size_min,
                &f.employer_size_max,
            )
        },
    },
    Predicate {
        name: "promotions_min",
        is_active: |f| parse_usize(&f.promotions_min).is_some(),
        matches: |c, f, _| {
            parse_usize(&f.promotions_min)
                .map_or(true, |min| MetricsService::max_promotions(c) >= min)
        },
    },
    Predicate {
        name: "was_promoted",
        is_active: |f| f.was_promoted.is_some(),
        matches: |c, f, _| f.was_promoted == Some(MetricsService::max_promotions(c) >= 1),
    },
    Predicate {
        name: "tech_stack_min_years",
        is_active: |f| f.tech_stack_min_years.as_ref().is_some_and(|t| t.is_set()),
        matches: |c, f, ctx| {
            let Some(threshold) = f.tech_stack_min_years.as_ref() else { return true };
            let min_years = threshold.min_years.unwrap_or(0.0);
            threshold
                .tags
                .iter()
                .all(|tag| MetricsService::stack_years(c, tag, ctx.today) >= min_years)
        },
    },
    Predicate {
        name: "work_mode_min_years",
        is_active: |f| f.work_mode_min_years.as_ref().is_some_and(|t| t.is_set()),
        matches: |c, f, ctx| {
            let Some(threshold) = f.work_mode_min_years.as_ref() else { return true };
            let min_years = threshold.min_years.unwrap_or(0.0);
            threshold
                .tags
                .iter()
                .all(|tag| MetricsService::work_mode_years(c, tag, ctx.today) >= min_years)
        },
    },
    Predicate {
        name: "career_transition",
        is_active: |f| !f.career_transition_from.is_empty() && !f.career_transition_to.is_empty(),
        matches: |c, f, _| {
            MetricsService::has_career_transition(
                c,
                &f.career_transition_from,
                &f.career_transition_to,
                f.career_transition_to_must_be_latest,
            )
        },
    },
    Predicate {
        name: "mutual_connection",
        is_active: |f| f.has_mutual_connection.is_some(),
        matches: |c, f, ctx| f.has_mutual_connection == Some(mutual_connection(c, f, ctx)),
    },
    Predicate {
        name: "joined_project_from_start",
        is_active: |f| !f.joined_project_from_start.is_empty(),
        matches: joined_any_project_from_start,
    },
    Predicate {
        name: "worked_with_top_developer",
        is_active: |f| f.worked_with_top_developer.is_some(),
        matches: |c, f, ctx| {
            f.worked_with_top_developer == Some(worked_with_top_developer(c, f, ctx))
        },
    },
    Predicate {
        name: "project_names",
        is_active: |f| !f.project_names.is_empty(),
        matches: |c, f, _| {
            any_in_set(c.projects.iter().map(|p| p.name.as_str()), &f.project_names)
        },
    },
    Predicate {
        name: "project_tech_stacks",
        is_active: |f| !f.project_tech_stacks.is_empty(),
        matches: |c, f, _| {
            tag_set_matches(&project_stacks(c), &f.project_tech_stacks, f.project_tech_stacks_require_all)
        },
    },
    Predicate {
        name: "project_team_size_range",
        is_active: |f| usize_range_active(&f.project_team_size_min, &f.project_team_size_max),
        matches: |c, f, _| {
            in_usize_range(
                max_project_team_size(c).map(|s| s.max(0) as usize),
                &f.project_team_size_min,
                &f.project_team_size_max,
            )
        },
    },
    Predicate {
        name: "project_count_min",
        is_active: |f| parse_usize(&f.project_count_min).is_some(),
        matches: |c, f, _| {
            parse_usize(&f.project_count_min).map_or(true, |min| c.projects.len() >= min)
        },
    },
    Predicate {
        name: "has_published_project",
        is_active: |f| f.has_published_project.is_some(),
        matches: |c, f, _| {
            f.has_published_project == Some(c.projects.iter().any(|p| p.is_published))
        },
    },
    Predicate {
        name: "project_search",
        is_active: |f| f.project_search.as_deref().is_some_and(|s| !s.trim().is_empty()),
        matches: |c, f, _| {
            let query = f.project_search.as_deref().unwrap_or_default();
            let standalone = c.projects.iter().any(|p| {
                contains_ci(&p.name, query)
                    || p.description.as_deref().is_some_and(|d| contains_ci(d, query))
            });
            let nested = c.work_experiences.iter().flat_map(|e| e.projects.iter()).any(|p| {
                contains_ci(&p.project_name, query)
                    || p.contribution_notes
                        .as_deref()
                        .is_some_and(|n| contains_ci(n, query))
            });
            standalone || nested
        },
    },
    Predicate {
        name: "university_locations",
        is_active: |f| !f.university_locations.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.educations
                    .iter()
                    .filter_map(|e| e.university_location_name.as_deref()),
                &f.university_locations,
            )
        },
    },
    Predicate {
        name: "degrees",
        is_active: |f| !f.degrees.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.educations.iter().filter_map(|e| e.degree_name.as_deref()),
                &f.degrees,
            )
        },
    },
    Predicate {
        name: "majors",
        is_active: |f| !f.majors.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.educations.iter().filter_map(|e| e.major_name.as_deref()),
                &f.majors,
            )
        },
    },
    Predicate {
        name: "grades_search",
        is_active: |f| f.grades_search.as_deref().is_some_and(|s| !s.trim().is_empty()),
        matches: |c, f, _| {
            let query = f.grades_search.as_deref().unwrap_or_default();
            c.educations
                .iter()
                .filter_map(|e| e.grades.as_deref())
                .any(|g| contains_ci(g, query))
        },
    },
    Predicate {
        name: "is_topper",
        is_active: |f| f.is_topper.is_some(),
        matches: |c, f, _| f.is_topper == Some(c.educations.iter().any(|e| e.is_topper)),
    },
    Predicate {
        name: "is_cheetah",
        is_active: |f| f.is_cheetah.is_some(),
        matches: |c, f, _| f.is_cheetah == Some(c.educations.iter().any(|e| e.is_cheetah)),
    },
    Predicate {
        name: "has_education",
        is_active: |f| f.has_education.is_some(),
        matches: |c, f, _| f.has_education == Some(!c.educations.is_empty()),
    },
    Predicate {
        name: "education_window",
        is_active: |f| f.education_started_after.is_some() || f.education_ended_before.is_some(),
        matches: |c, f, _| {
            c.educations.iter().any(|e| {
                let started_ok = match f.education_started_after {
                    Some(after) => e.start_month.is_some_and(|s| s >= after),
                    None => true,
                };
                let ended_ok = match f.education_ended_before {
                    Some(before) => e.end_month.is_some_and(|s| s <= before),
                    None => true,
                };
                started_ok && ended_ok
            })
        },
    },
    Predicate {
        name: "certification_names",
        is_active: |f| !f.certification_names.is_empty(),
        matches: |c, f, _| {
            any_in_set(
                c.certifications.iter().map(|ct| ct.certification_name.as_str()),
                &f.certification_names,
            )
        },
    },
    Predicate {
        name: "has_certifications",
        is_active: |f| f.has_certifications.is_some(),
        matches: |c, f, _| f.has_certifications == Some(!c.certifications.is_empty()),
    },
    Predicate {
        name: "has_active_certification",
        is_active: |f| f.has_active_certification.is_some(),
        matches: |c, f, ctx| {
            let active = !c.certifications.is_empty()
                && MetricsService::has_active_certification(c, ctx.today);
            f.has_active_certification == Some(active)
        },
    },
    Predicate {
        name: "certification_issued_window",
        is_active: |f| {
            f.certification_issued_after.is_some() || f.certification_issued_before.is_some()
        },
        matches: |c, f, _| {
            c.certifications.iter().any(|ct| {
                ct.issue_date.is_some_and(|d| {
                    f.certification_issued_after.map_or(true, |after| d >= after)
                        && f.certification_issued_before.map_or(true, |before| d <= before)
                })
            })
        },
    },
    Predicate {
        name: "certification_expiring_before",
        is_active: |f| f.certification_expiring_before.is_some(),
        matches: |c, f, _| {
            let Some(before) = f.certification_expiring_before else { return true };
            c.certifications
                .iter()
                .any(|ct| ct.expiry_date.is_some_and(|d| d <= before))
        },
    },
    Predicate {
        name: "achievement_search",
        is_active: |f| f.achievement_search.as_deref().is_some_and(|s| !s.trim().is_empty()),
        matches: |c, f, _| {
            let query = f.achievement_search.as_deref().unwrap_or_default();
            c.achievements.iter().any(|a| {
                contains_ci(&a.title, query)
                    || a.description.as_deref().is_some_and(|d| contains_ci(d, query))
            })
        },
    },
    Predicate {
        name: "has_achievements",
        is_active: |f| f.has_achievements.is_some(),
        matches: |c, f, _| f.has_achievements == Some(!c.achievements.is_empty()),
    },
];
