//! Application DTOs

mod leg_dto;

pub use leg_dto::{AnalysisRequestDto, DtoError, LegDto};
