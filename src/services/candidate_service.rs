use crate::dto::candidate_dto::{
    AchievementPayload, BenefitPayload, CertificationPayload, CreateCandidatePayload,
    EducationPayload, ProjectPayload, UpdateCandidatePayload, WorkExperiencePayload,
};
use crate::models::candidate::{
    Achievement, Benefit, Candidate, CandidateStatus, Certification, Education, Project,
    ProjectExperience, WorkExperience,
};
use crate::store::CandidateStore;
use crate::utils::text::dedup_case_insensitive;
use crate::utils::time;
use anyhow::Result;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Form-submission lifecycle for candidate records: create from the full
/// dialog, partial full-form edits, status moves. Child collections get
/// fresh stable ids and ingestion-time tag normalization here.
pub struct CandidateService<S: CandidateStore> {
    store: S,
}

impl<S: CandidateStore> CandidateService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_candidate(&self, id: Uuid) -> Option<Candidate> {
        self.store.get(id)
    }

    pub fn list_candidates(&self) -> Vec<Candidate> {
        self.store.list()
    }

    pub fn create_candidate(&mut self, payload: CreateCandidatePayload) -> Result<Candidate> {
        payload.validate()?;

        if let Some(ref email) = payload.email {
            if self.store.find_by_email(email).is_some() {
                return Err(anyhow::anyhow!(
                    "A candidate with this email address already exists."
                ));
            }
        }
        if let Some(ref mobile) = payload.mobile_no {
            if !mobile.is_empty() && self.store.find_by_mobile(mobile).is_some() {
                return Err(anyhow::anyhow!(
                    "A candidate with this mobile number already exists."
                ));
            }
        }

        let now = time::now();
        let candidate = Candidate {
            id: Uuid::new_v4(),
            name: payload.name.trim().to_string(),
            city: payload.city,
            cnic: payload.cnic,
            mobile_no: payload.mobile_no,
            email: payload.email,
            linkedin_url: payload.linkedin_url,
            github_url: payload.github_url,
            posting_title: payload.posting_title,
            source: payload.source,
            personality_type: payload.personality_type,
            current_salary: payload.current_salary,
            expected_salary: payload.expected_salary,
            is_top_developer: payload.is_top_developer,
            status: payload.status.unwrap_or(CandidateStatus::Pending),
            work_experiences: payload
                .work_experiences
                .into_iter()
                .map(ingest_work_experience)
                .collect(),
            projects: payload.projects.into_iter().map(ingest_project).collect(),
            educations: payload.educations.into_iter().map(ingest_education).collect(),
            certifications: payload
                .certifications
                .into_iter()
                .map(ingest_certification)
                .collect(),
            achievements: payload
                .achievements
                .into_iter()
                .map(ingest_achievement)
                .collect(),
            created_at: now,
            updated_at: now,
        };

        self.store.upsert(candidate.clone())?;
        info!(candidate_id = %candidate.id, "candidate created");
        Ok(candidate)
    }

    /// Full-form edit: absent fields stay, present child collections
    /// replace the stored ones wholesale.
    pub fn update_candidate(
        &mut self,
        id: Uuid,
        payload: UpdateCandidatePayload,
    ) -> Result<Candidate> {
        payload.validate()?;
        let mut candidate = self
            .store
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("Candidate not found: {}", id))?;

        if let Some(name) = payload.name {
            candidate.name = name;
        }
        if let Some(city) = payload.city {
            candidate.city = Some(city);
        }
        if let Some(cnic) = payload.cnic {
            candidate.cnic = Some(cnic);
        }
        if let Some(mobile_no) = payload.mobile_no {
            candidate.mobile_no = Some(mobile_no);
        }
        if let Some(email) = payload.email {
            candidate.email = Some(email);
        }
        if let Some(linkedin_url) = payload.linkedin_url {
            candidate.linkedin_url = Some(linkedin_url);
        }
        if let Some(github_url) = payload.github_url {
            candidate.github_url = Some(github_url);
        }
        if let Some(posting_title) = payload.posting_title {
            candidate.posting_title = Some(posting_title);
        }
        if let Some(source) = payload.source {
            candidate.source = Some(source);
        }
        if let Some(personality_type) = payload.personality_type {
            candidate.personality_type = Some(personality_type);
        }
        if let Some(current_salary) = payload.current_salary {
            candidate.current_salary = Some(current_salary);
        }
        if let Some(expected_salary) = payload.expected_salary {
            candidate.expected_salary = Some(expected_salary);
        }
        if let Some(is_top_developer) = payload.is_top_developer {
            candidate.is_top_developer = is_top_developer;
        }
        if let Some(status) = payload.status {
            candidate.status = status;
        }
        if let Some(experiences) = payload.work_experiences {
            candidate.work_experiences =
                experiences.into_iter().map(ingest_work_experience).collect();
        }
        if let Some(projects) = payload.projects {
            candidate.projects = projects.into_iter().map(ingest_project).collect();
        }
        if let Some(educations) = payload.educations {
            candidate.educations = educations.into_iter().map(ingest_education).collect();
        }
        if let Some(certifications) = payload.certifications {
            candidate.certifications =
                certifications.into_iter().map(ingest_certification).collect();
        }
        if let Some(achievements) = payload.achievements {
            candidate.achievements = achievements.into_iter().map(ingest_achievement).collect();
        }
        candidate.updated_at = time::now();

        self.store.upsert(candidate.clone())?;
        Ok(candidate)
    }

    pub fn update_status(&mut self, id: Uuid, status: CandidateStatus) -> Result<Candidate> {
        let mut candidate = self
            .store
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("Candidate not found: {}", id))?;
        candidate.status = status;
        candidate.updated_at = time::now();
        self.store.upsert(candidate.clone())?;
        info!(candidate_id = %id, status = status.as_str(), "candidate status updated");
        Ok(candidate)
    }

    pub fn status_counts(&self) -> HashMap<CandidateStatus, usize> {
        let mut counts = HashMap::new();
        for candidate in self.store.list() {
            *counts.entry(candidate.status).or_insert(0) += 1;
        }
        counts
    }
}

fn ingest_work_experience(payload: WorkExperiencePayload) -> WorkExperience {
    WorkExperience {
        id: Uuid::new_v4(),
        employer_name: payload.employer_name.trim().to_string(),
        job_title: payload.job_title.trim().to_string(),
        employer_type: payload.employer_type,
        employer_size: payload.employer_size,
        start_date: payload.start_date,
        end_date: payload.end_date,
        tech_stacks: dedup_case_insensitive(payload.tech_stacks),
        domains: dedup_case_insensitive(payload.domains),
        shift_type: payload.shift_type,
        work_mode: payload.work_mode,
        time_support_zones: dedup_case_insensitive(payload.time_support_zones),
        benefits: payload.benefits.into_iter().map(ingest_benefit).collect(),
        projects: payload
            .projects
            .into_iter()
            .map(ingest_project_experience)
            .collect(),
    }
}

fn ingest_project_experience(payload: crate::dto::candidate_dto::ProjectExperiencePayload) -> ProjectExperience {
    ProjectExperience {
        id: Uuid::new_v4(),
        project_name: payload.project_name.trim().to_string(),
        contribution_notes: payload.contribution_notes,
    }
}

fn ingest_benefit(payload: BenefitPayload) -> Benefit {
    Benefit {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        amount: payload.amount,
        unit: payload.unit,
    }
}

fn ingest_project(payload: ProjectPayload) -> Project {
    Project {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        description: payload.description,
        tech_stacks: dedup_case_insensitive(payload.tech_stacks),
        team_size: payload.team_size,
        is_published: payload.is_published,
        url: payload.url,
        start_date: payload.start_date,
        end_date: payload.end_date,
    }
}

fn ingest_education(payload: EducationPayload) -> Education {
    Education {
        id: Uuid::new_v4(),
        university_location_id: payload.university_location_id,
        university_location_name: payload.university_location_name,
        degree_name: payload.degree_name,
        major_name: payload.major_name,
        start_month: payload.start_month,
        end_month: payload.end_month,
        grades: payload.grades,
        is_topper: payload.is_topper,
        is_cheetah: payload.is_cheetah,
    }
}

fn ingest_certification(payload: CertificationPayload) -> Certification {
    Certification {
        id: Uuid::new_v4(),
        certification_id: payload.certification_id,
        certification_name: payload.certification_name.trim().to_string(),
        issue_date: payload.issue_date,
        expiry_date: payload.expiry_date,
        certification_url: payload.certification_url,
    }
}

fn ingest_achievement(payload: AchievementPayload) -> Achievement {
    Achievement {
        id: Uuid::new_v4(),
        title: payload.title.trim().to_string(),
        description: payload.description,
        awarded_on: payload.awarded_on,
    }
}
