pub mod candidate_dto;
pub mod filter_dto;
