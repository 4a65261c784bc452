//! Risk assessment API routes

use crate::error::ApiError;
use crate::services::RiskAssessmentService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    routing::{get, post},
    Form, Json, Router,
};
use cardio_risk_shared::{RiskAssessmentRequest, RiskAssessmentResponse, RiskModelInfo};
use serde::{de, Deserialize, Deserializer};

/// Create risk routes
pub fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/assess", post(assess_risk))
        .route("/model", get(get_model))
}

/// POST /api/v1/risk/assess - Score a JSON request
async fn assess_risk(
    State(state): State<AppState>,
    payload: Result<Json<RiskAssessmentRequest>, JsonRejection>,
) -> Result<Json<RiskAssessmentResponse>, ApiError> {
    let Json(req) = payload?;
    RiskAssessmentService::assess(state.model(), req).map(Json)
}

/// GET /api/v1/risk/model - Describe the active scoring model
async fn get_model(State(state): State<AppState>) -> Json<RiskModelInfo> {
    Json(RiskModelInfo::from_model(state.model()))
}

/// Risk factors submitted from an HTML form
///
/// Checkboxes are only sent when ticked, so every flag defaults to false.
#[derive(Debug, Deserialize)]
pub struct RiskAssessmentForm {
    pub age: i32,
    #[serde(alias = "sex")]
    pub gender: String,
    pub total_cholesterol: i32,
    pub hdl_cholesterol: i32,
    pub systolic_bp: i32,
    #[serde(default, deserialize_with = "checkbox")]
    pub smoker: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub diabetic: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub bp_treated: bool,
}

impl From<RiskAssessmentForm> for RiskAssessmentRequest {
    fn from(form: RiskAssessmentForm) -> Self {
        Self {
            age: form.age,
            sex: form.gender,
            total_cholesterol: form.total_cholesterol,
            hdl_cholesterol: form.hdl_cholesterol,
            systolic_bp: form.systolic_bp,
            smoker: form.smoker,
            diabetic: form.diabetic,
            bp_treated: form.bp_treated,
        }
    }
}

/// Parse an HTML checkbox value
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" | "" => Ok(false),
        other => Err(de::Error::custom(format!("invalid checkbox value: {}", other))),
    }
}

/// POST /calculate - Score a form submission
pub async fn calculate_form(
    State(state): State<AppState>,
    payload: Result<Form<RiskAssessmentForm>, FormRejection>,
) -> Result<Json<RiskAssessmentResponse>, ApiError> {
    let Form(form) = payload?;
    RiskAssessmentService::assess(state.model(), form.into()).map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_maps_gender_to_sex() {
        let form = RiskAssessmentForm {
            age: 55,
            gender: "male".to_string(),
            total_cholesterol: 220,
            hdl_cholesterol: 45,
            systolic_bp: 135,
            smoker: true,
            diabetic: false,
            bp_treated: true,
        };

        let req = RiskAssessmentRequest::from(form);

        assert_eq!(req.sex, "male");
        assert_eq!(req.total_cholesterol, 220);
        assert!(req.smoker);
        assert!(!req.diabetic);
        assert!(req.bp_treated);
    }
}
