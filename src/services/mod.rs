pub mod candidate_service;
pub mod export_service;
pub mod filter_service;
pub mod metrics_service;
pub mod verification_service;
