//! Business logic services

pub mod risk;

pub use risk::RiskAssessmentService;
