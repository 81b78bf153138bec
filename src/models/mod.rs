pub mod audit_log;
pub mod candidate;
pub mod verification;
