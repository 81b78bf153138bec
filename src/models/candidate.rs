use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub cnic: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub posting_title: Option<String>,
    pub source: Option<String>,
    pub personality_type: Option<String>,
    pub current_salary: Option<Decimal>,
    pub expected_salary: Option<Decimal>,
    pub is_top_developer: bool,
    pub status: CandidateStatus,
    pub work_experiences: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub educations: Vec<Education>,
    pub certifications: Vec<Certification>,
    #[serde(alias = "competitions")]
    pub achievements: Vec<Achievement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Active,
    Pending,
    Interviewed,
    Shortlisted,
    Hired,
    Rejected,
    Withdrawn,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Active => "active",
            CandidateStatus::Pending => "pending",
            CandidateStatus::Interviewed => "interviewed",
            CandidateStatus::Shortlisted => "shortlisted",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::Withdrawn => "withdrawn",
        }
    }
}

/// One employment on a candidate's history. An absent `end_date` means
/// the candidate still works there.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: Uuid,
    pub employer_name: String,
    pub job_title: String,
    pub employer_type: Option<String>,
    pub employer_size: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Case-preserved, de-duplicated case-insensitively at ingestion.
    pub tech_stacks: Vec<String>,
    pub domains: Vec<String>,
    pub shift_type: Option<ShiftType>,
    pub work_mode: Option<WorkMode>,
    pub time_support_zones: Vec<String>,
    pub benefits: Vec<Benefit>,
    pub projects: Vec<ProjectExperience>,
}

impl WorkExperience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Project performed during a particular employment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectExperience {
    pub id: Uuid,
    pub project_name: String,
    pub contribution_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub id: Uuid,
    pub name: String,
    pub amount: Option<Decimal>,
    pub unit: Option<BenefitUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitUnit {
    Monthly,
    Yearly,
    OneTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Morning,
    Evening,
    Night,
    Rotational,
}

impl ShiftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Evening => "evening",
            ShiftType::Night => "night",
            ShiftType::Rotational => "rotational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Onsite,
    Remote,
    Hybrid,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Onsite => "onsite",
            WorkMode::Remote => "remote",
            WorkMode::Hybrid => "hybrid",
        }
    }
}

/// Standalone project owned by the candidate, outside any employment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tech_stacks: Vec<String>,
    pub team_size: Option<i32>,
    pub is_published: bool,
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub university_location_id: Option<Uuid>,
    pub university_location_name: Option<String>,
    pub degree_name: Option<String>,
    pub major_name: Option<String>,
    /// Month-granularity dates, stored as the first day of the month.
    pub start_month: Option<NaiveDate>,
    pub end_month: Option<NaiveDate>,
    pub grades: Option<String>,
    pub is_topper: bool,
    pub is_cheetah: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub certification_id: Option<Uuid>,
    pub certification_name: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub certification_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub awarded_on: Option<NaiveDate>,
}
