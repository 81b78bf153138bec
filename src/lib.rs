pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

pub use error::{Error, Result};

use crate::services::candidate_service::CandidateService;
use crate::services::filter_service::{FilterService, ReferenceData};
use crate::services::verification_service::VerificationService;
use crate::store::memory::{InMemoryCandidateStore, InMemoryVerificationStore};

/// The in-memory wiring of the core: candidate CRUD, filter evaluation and
/// field verification over the shipped stores. A host swapping in durable
/// storage constructs the services directly with its own store types.
pub struct AppState {
    pub candidate_service: CandidateService<InMemoryCandidateStore>,
    pub verification_service: VerificationService<InMemoryVerificationStore>,
    pub filter_service: FilterService,
}

impl AppState {
    pub fn new(reference: ReferenceData) -> Self {
        let config = crate::config::get_config();

        Self {
            candidate_service: CandidateService::new(InMemoryCandidateStore::new()),
            verification_service: VerificationService::new(InMemoryVerificationStore::new()),
            filter_service: FilterService::new(config, reference),
        }
    }
}
