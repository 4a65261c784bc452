//! Error types for the risk scoring engine

use thiserror::Error;

use crate::validation::get_field_display_label;

/// Errors raised before or around scoring
///
/// Scoring itself is total over validated input, so every variant here
/// describes a problem with what the caller handed in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Unknown risk model: {0}")]
    UnknownModel(String),
}

impl RiskError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        RiskError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            RiskError::InvalidInput { field, .. } => Some(field),
            RiskError::UnknownModel(_) => None,
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            RiskError::InvalidInput { field, message } => {
                format!("{}: {}", get_field_display_label(field), message)
            }
            RiskError::UnknownModel(id) => format!("Unknown risk model '{}'", id),
        }
    }
}
