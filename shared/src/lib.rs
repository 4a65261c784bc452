//! Cardio Risk Shared Library
//!
//! This crate contains the cardiovascular risk scoring engine together with
//! the request/response types and validation used by the backend and the
//! WASM module.

pub mod assessment;
pub mod errors;
pub mod framingham;
pub mod recommendations;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use assessment::*;
pub use errors::*;
pub use framingham::*;
pub use recommendations::recommend;
pub use types::*;
