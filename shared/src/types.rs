//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::assessment::RiskAssessment;
use crate::framingham::{PointsBreakdown, RiskFactors, RiskModel, RiskResult};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Risk Assessment Types
// ============================================================================

/// Unvalidated risk factors as submitted by a client
///
/// Numbers are signed so that negative input reaches validation and is
/// rejected there instead of failing deserialization with a vague message.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RiskAssessmentRequest {
    #[validate(range(min = 0, max = 130, message = "must be between 0 and 130 years"))]
    pub age: i32,
    /// "male" or "female"
    #[serde(alias = "gender")]
    pub sex: String,
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000 mg/dL"))]
    pub total_cholesterol: i32,
    #[validate(range(min = 1, max = 300, message = "must be between 1 and 300 mg/dL"))]
    pub hdl_cholesterol: i32,
    #[validate(range(min = 1, max = 350, message = "must be between 1 and 350 mmHg"))]
    pub systolic_bp: i32,
    #[serde(default)]
    pub smoker: bool,
    #[serde(default)]
    pub diabetic: bool,
    #[serde(default)]
    pub bp_treated: bool,
}

/// Risk assessment response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessmentResponse {
    pub factors: RiskFactors,
    pub breakdown: PointsBreakdown,
    pub result: RiskResult,
    pub recommendations: Vec<String>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
}

impl RiskAssessmentResponse {
    pub fn at(mut self, assessed_at: DateTime<Utc>) -> Self {
        self.assessed_at = Some(assessed_at);
        self
    }
}

impl From<RiskAssessment> for RiskAssessmentResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            factors: assessment.factors,
            breakdown: assessment.breakdown,
            result: assessment.result,
            recommendations: assessment.recommendations,
            model: assessment.model,
            assessed_at: None,
        }
    }
}

/// Description of the active scoring model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskModelInfo {
    pub id: String,
    pub description: String,
}

impl RiskModelInfo {
    pub fn from_model(model: &dyn RiskModel) -> Self {
        Self {
            id: model.id().to_string(),
            description: model.description().to_string(),
        }
    }
}
