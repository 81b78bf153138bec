use crate::models::candidate::{Candidate, WorkExperience};
use crate::utils::text::{eq_ci, norm};
use crate::utils::time::{months_between, months_to_years};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Values computed from raw work-experience records rather than stored
/// directly: experience totals, tenure, promotions, career transitions.
/// All date arithmetic treats an open-ended experience as running until
/// `today`, and experiences without a start date as having no data.
pub struct MetricsService;

impl MetricsService {
    pub fn experience_months(exp: &WorkExperience, today: NaiveDate) -> Option<i64> {
        let start = exp.start_date?;
        let end = exp.end_date.unwrap_or(today);
        Some(months_between(start, end))
    }

    /// Total months across dated experiences. `None` when the candidate has
    /// no dated experience at all, so range filters treat it as no data.
    pub fn total_experience_months(candidate: &Candidate, today: NaiveDate) -> Option<i64> {
        let mut any = false;
        let mut total = 0;
        for exp in &candidate.work_experiences {
            if let Some(months) = Self::experience_months(exp, today) {
                any = true;
                total += months;
            }
        }
        any.then_some(total)
    }

    /// Years of experience, one decimal. Overlapping experiences are
    /// additive, not de-duplicated.
    pub fn years_of_experience(candidate: &Candidate, today: NaiveDate) -> Option<f64> {
        Self::total_experience_months(candidate, today).map(months_to_years)
    }

    /// Experiences grouped by normalized employer name, each employer
    /// spanning earliest start to latest end-or-today.
    fn employer_spans(
        candidate: &Candidate,
        today: NaiveDate,
    ) -> HashMap<String, (NaiveDate, NaiveDate)> {
        let mut spans: HashMap<String, (NaiveDate, NaiveDate)> = HashMap::new();
        for exp in &candidate.work_experiences {
            let Some(start) = exp.start_date else { continue };
            let end = exp.end_date.unwrap_or(today);
            let entry = spans.entry(norm(&exp.employer_name)).or_insert((start, end));
            if start < entry.0 {
                entry.0 = start;
            }
            if end > entry.1 {
                entry.1 = end;
            }
        }
        spans
    }

    /// Mean employer span in years, one decimal, across distinct employers.
    pub fn average_job_tenure(candidate: &Candidate, today: NaiveDate) -> Option<f64> {
        let spans = Self::employer_spans(candidate, today);
        if spans.is_empty() {
            return None;
        }
        let total_years: f64 = spans
            .values()
            .map(|(start, end)| months_between(*start, *end) as f64 / 12.0)
            .sum();
        Some(((total_years / spans.len() as f64) * 10.0).round() / 10.0)
    }

    pub fn distinct_employer_count(candidate: &Candidate) -> usize {
        candidate
            .work_experiences
            .iter()
            .map(|e| norm(&e.employer_name))
            .collect::<std::collections::HashSet<_>>()
            .len()
    }

    /// Distinct job titles held at one employer, ordered by start date,
    /// minus one. Employers with fewer than two dated experiences count
    /// as zero promotions.
    pub fn employer_promotions(candidate: &Candidate, employer: &str) -> usize {
        let mut dated: Vec<(&WorkExperience, NaiveDate)> = candidate
            .work_experiences
            .iter()
            .filter(|e| eq_ci(&e.employer_name, employer))
            .filter_map(|e| e.start_date.map(|s| (e, s)))
            .collect();
        if dated.len() < 2 {
            return 0;
        }
        dated.sort_by_key(|(_, start)| *start);

        let mut titles: Vec<String> = Vec::new();
        for (exp, _) in &dated {
            let title = norm(&exp.job_title);
            if !titles.contains(&title) {
                titles.push(title);
            }
        }
        titles.len().saturating_sub(1)
    }

    /// Best promotion count over all of the candidate's employers.
    pub fn max_promotions(candidate: &Candidate) -> usize {
        let employers: std::collections::HashSet<String> = candidate
            .work_experiences
            .iter()
            .map(|e| e.employer_name.clone())
            .collect();
        employers
            .iter()
            .map(|e| Self::employer_promotions(candidate, e))
            .max()
            .unwrap_or(0)
    }

    /// True when an employer-type-tagged experience in `from` starts
    /// chronologically before one in `to`. With `to_must_be_latest`, the
    /// `to` experience must be the candidate's most recent start.
    pub fn has_career_transition(
        candidate: &Candidate,
        from: &[String],
        to: &[String],
        to_must_be_latest: bool,
    ) -> bool {
        let typed: Vec<(&str, NaiveDate)> = candidate
            .work_experiences
            .iter()
            .filter_map(|e| match (&e.employer_type, e.start_date) {
                (Some(t), Some(s)) => Some((t.as_str(), s)),
                _ => None,
            })
            .collect();

        let latest_start = candidate
            .work_experiences
            .iter()
            .filter_map(|e| e.start_date)
            .max();

        let in_set = |value: &str, set: &[String]| set.iter().any(|s| eq_ci(s, value));

        typed.iter().any(|(from_type, from_start)| {
            in_set(from_type, from)
                && typed.iter().any(|(to_type, to_start)| {
                    in_set(to_type, to)
                        && from_start < to_start
                        && (!to_must_be_latest || Some(*to_start) == latest_start)
                })
        })
    }

    /// Cumulative years across experiences carrying the given tech-stack
    /// tag. Unrounded; threshold comparisons use the raw value.
    pub fn stack_years(candidate: &Candidate, tag: &str, today: NaiveDate) -> f64 {
        let months: i64 = candidate
            .work_experiences
            .iter()
            .filter(|e| e.tech_stacks.iter().any(|s| eq_ci(s, tag)))
            .filter_map(|e| Self::experience_months(e, today))
            .sum();
        months as f64 / 12.0
    }

    /// Cumulative years across experiences under the given work mode tag.
    pub fn work_mode_years(candidate: &Candidate, mode_tag: &str, today: NaiveDate) -> f64 {
        let months: i64 = candidate
            .work_experiences
            .iter()
            .filter(|e| e.work_mode.is_some_and(|m| eq_ci(m.as_str(), mode_tag)))
            .filter_map(|e| Self::experience_months(e, today))
            .sum();
        months as f64 / 12.0
    }

    pub fn is_currently_working(candidate: &Candidate) -> bool {
        candidate.work_experiences.iter().any(|e| e.is_current())
    }

    /// A certification with no expiry date never expires.
    pub fn has_active_certification(candidate: &Candidate, today: NaiveDate) -> bool {
        candidate
            .certifications
            .iter()
            .any(|c| c.expiry_date.map_or(true, |d| d >= today))
    }
}
