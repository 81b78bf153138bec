use crate::models::candidate::{BenefitUnit, CandidateStatus, ShiftType, WorkMode};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Full-form create submission from the candidate dialog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub cnic: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub mobile_no: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub email: Option<String>,
    #[validate(url)]
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub linkedin_url: Option<String>,
    #[validate(url)]
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub posting_title: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub personality_type: Option<String>,
    pub current_salary: Option<Decimal>,
    pub expected_salary: Option<Decimal>,
    #[serde(default)]
    pub is_top_developer: bool,
    pub status: Option<CandidateStatus>,
    #[validate(nested)]
    #[serde(default)]
    pub work_experiences: Vec<WorkExperiencePayload>,
    #[serde(default)]
    pub projects: Vec<ProjectPayload>,
    #[serde(default)]
    pub educations: Vec<EducationPayload>,
    #[serde(default)]
    pub certifications: Vec<CertificationPayload>,
    #[serde(default, alias = "competitions")]
    pub achievements: Vec<AchievementPayload>,
}

/// Partial full-form edit. Absent fields are left untouched; child
/// collections, when present, replace the stored ones wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCandidatePayload {
    #[serde(deserialize_with = "trim_optional_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub city: Option<String>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub cnic: Option<String>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub mobile_no: Option<String>,
    #[validate(email)]
    #[serde(deserialize_with = "trim_optional_string")]
    pub email: Option<String>,
    #[validate(url)]
    #[serde(deserialize_with = "trim_optional_string")]
    pub linkedin_url: Option<String>,
    #[validate(url)]
    #[serde(deserialize_with = "trim_optional_string")]
    pub github_url: Option<String>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub posting_title: Option<String>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub source: Option<String>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub personality_type: Option<String>,
    pub current_salary: Option<Decimal>,
    pub expected_salary: Option<Decimal>,
    pub is_top_developer: Option<bool>,
    pub status: Option<CandidateStatus>,
    #[validate(nested)]
    pub work_experiences: Option<Vec<WorkExperiencePayload>>,
    pub projects: Option<Vec<ProjectPayload>>,
    pub educations: Option<Vec<EducationPayload>>,
    pub certifications: Option<Vec<CertificationPayload>>,
    #[serde(alias = "competitions")]
    pub achievements: Option<Vec<AchievementPayload>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperiencePayload {
    #[validate(length(min = 1, message = "Employer name is required"))]
    pub employer_name: String,
    #[validate(length(min = 1, message = "Job title is required"))]
    pub job_title: String,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub employer_type: Option<String>,
    pub employer_size: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    pub shift_type: Option<ShiftType>,
    pub work_mode: Option<WorkMode>,
    #[serde(default)]
    pub time_support_zones: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<BenefitPayload>,
    #[serde(default)]
    pub projects: Vec<ProjectExperiencePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectExperiencePayload {
    pub project_name: String,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub contribution_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitPayload {
    pub name: String,
    pub amount: Option<Decimal>,
    pub unit: Option<BenefitUnit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub name: String,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    pub team_size: Option<i32>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPayload {
    pub university_location_id: Option<Uuid>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub university_location_name: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub degree_name: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub major_name: Option<String>,
    pub start_month: Option<NaiveDate>,
    pub end_month: Option<NaiveDate>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub grades: Option<String>,
    #[serde(default)]
    pub is_topper: bool,
    #[serde(default)]
    pub is_cheetah: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationPayload {
    pub certification_id: Option<Uuid>,
    pub certification_name: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub certification_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPayload {
    pub title: String,
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub description: Option<String>,
    pub awarded_on: Option<NaiveDate>,
}

// Custom deserializer to trim strings and convert empty strings to None
fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
