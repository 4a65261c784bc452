//! Cardio Risk WASM Module
//!
//! This crate provides WebAssembly bindings so the risk scoring engine can
//! run in the browser without a round trip to the backend.

use cardio_risk_shared::{
    assess, categorize, compute_points, BiologicalSex, ErrorDetail, ErrorResponse,
    FraminghamPointsModel, RiskAssessmentRequest, RiskAssessmentResponse, RiskError,
};
use wasm_bindgen::prelude::*;

fn sex_from_flag(is_male: bool) -> BiologicalSex {
    if is_male {
        BiologicalSex::Male
    } else {
        BiologicalSex::Female
    }
}

fn error_json(code: &str, message: String, field: Option<String>) -> String {
    let body = ErrorResponse {
        error: ErrorDetail {
            code: code.to_string(),
            message,
            field,
        },
    };
    serde_json::to_string(&body).unwrap_or_else(|_| "{}".to_string())
}

fn validation_error_json(err: RiskError) -> String {
    error_json(
        "VALIDATION_ERROR",
        err.user_message(),
        err.field().map(str::to_string),
    )
}

/// JSON request in, JSON assessment or JSON error out
fn assess_json(request_json: &str) -> Result<String, String> {
    let request: RiskAssessmentRequest = serde_json::from_str(request_json)
        .map_err(|e| error_json("BAD_REQUEST", e.to_string(), None))?;

    let factors = request.into_factors().map_err(validation_error_json)?;

    let response = RiskAssessmentResponse::from(assess(&FraminghamPointsModel, factors));
    serde_json::to_string(&response).map_err(|e| error_json("INTERNAL_ERROR", e.to_string(), None))
}

/// Run a full risk assessment
///
/// Takes a JSON `RiskAssessmentRequest` and returns a JSON
/// `RiskAssessmentResponse`. On failure the rejected value is a JSON
/// `ErrorResponse` string.
#[wasm_bindgen]
pub fn assess_risk(request_json: &str) -> Result<String, JsValue> {
    assess_json(request_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate raw values and total their points, or return JSON error text
fn points_checked(request: RiskAssessmentRequest) -> Result<i32, String> {
    let factors = request.into_factors().map_err(validation_error_json)?;
    Ok(compute_points(&factors))
}

/// Calculate the Framingham point total
///
/// Values are range checked the same way as `assess_risk`; on failure the
/// rejected value is a JSON `ErrorResponse` string.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn framingham_points(
    age: i32,
    is_male: bool,
    total_cholesterol: i32,
    hdl_cholesterol: i32,
    systolic_bp: i32,
    is_smoker: bool,
    is_diabetic: bool,
    is_on_bp_treatment: bool,
) -> Result<i32, JsValue> {
    points_checked(RiskAssessmentRequest {
        age,
        sex: sex_from_flag(is_male).as_str().to_string(),
        total_cholesterol,
        hdl_cholesterol,
        systolic_bp,
        smoker: is_smoker,
        diabetic: is_diabetic,
        bp_treated: is_on_bp_treatment,
    })
    .map_err(|e| JsValue::from_str(&e))
}

/// Convert a point total to a 10-year risk percentage
#[wasm_bindgen]
pub fn points_to_risk(points: i32, is_male: bool) -> u8 {
    cardio_risk_shared::points_to_risk(points, sex_from_flag(is_male))
}

/// Risk category name ("Low", "Moderate" or "High") for a risk percentage
#[wasm_bindgen]
pub fn risk_category(risk_percentage: u8, is_male: bool) -> String {
    categorize(risk_percentage, sex_from_flag(is_male)).to_string()
}
