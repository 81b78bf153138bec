#![allow(dead_code)]

use chrono::NaiveDate;
use recruitment_core::models::candidate::{
    Candidate, CandidateStatus, Certification, Education, Project, ProjectExperience,
    WorkExperience,
};
use recruitment_core::utils::time::now;
use uuid::Uuid;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn candidate(name: &str) -> Candidate {
    let ts = now();
    Candidate {
        id: Uuid::new_v4(),
        name: name.to_string(),
        city: None,
        cnic: None,
        mobile_no: None,
        email: None,
        linkedin_url: None,
        github_url: None,
        posting_title: None,
        source: None,
        personality_type: None,
        current_salary: None,
        expected_salary: None,
        is_top_developer: false,
        status: CandidateStatus::Active,
        work_experiences: Vec::new(),
        projects: Vec::new(),
        educations: Vec::new(),
        certifications: Vec::new(),
        achievements: Vec::new(),
        created_at: ts,
        updated_at: ts,
    }
}

pub fn experience(
    employer: &str,
    title: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> WorkExperience {
    WorkExperience {
        id: Uuid::new_v4(),
        employer_name: employer.to_string(),
        job_title: title.to_string(),
        employer_type: None,
        employer_size: None,
        start_date: start,
        end_date: end,
        tech_stacks: Vec::new(),
        domains: Vec::new(),
        shift_type: None,
        work_mode: None,
        time_support_zones: Vec::new(),
        benefits: Vec::new(),
        projects: Vec::new(),
    }
}

pub fn project_experience(name: &str) -> ProjectExperience {
    ProjectExperience {
        id: Uuid::new_v4(),
        project_name: name.to_string(),
        contribution_notes: None,
    }
}

pub fn project(name: &str, tech_stacks: &[&str], is_published: bool) -> Project {
    Project {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        tech_stacks: tech_stacks.iter().map(|s| s.to_string()).collect(),
        team_size: None,
        is_published,
        url: None,
        start_date: None,
        end_date: None,
    }
}

pub fn education(university: &str, degree: &str) -> Education {
    Education {
        id: Uuid::new_v4(),
        university_location_id: None,
        university_location_name: Some(university.to_string()),
        degree_name: Some(degree.to_string()),
        major_name: None,
        start_month: None,
        end_month: None,
        grades: None,
        is_topper: false,
        is_cheetah: false,
    }
}

pub fn certification(
    name: &str,
    issue: Option<NaiveDate>,
    expiry: Option<NaiveDate>,
) -> Certification {
    Certification {
        id: Uuid::new_v4(),
        certification_id: None,
        certification_name: name.to_string(),
        issue_date: issue,
        expiry_date: expiry,
        certification_url: None,
    }
}
