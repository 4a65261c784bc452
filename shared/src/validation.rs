//! Input validation functions
//!
//! Raw requests are checked here before anything reaches the scoring engine.
//! Numeric ranges come from the `validator` derive on
//! [`RiskAssessmentRequest`]; sex is parsed by hand.

use serde::Deserialize;
use validator::Validate;

use crate::errors::RiskError;
use crate::framingham::{BiologicalSex, RiskFactors};
use crate::types::RiskAssessmentRequest;

/// Valid biological sex values
pub const VALID_BIOLOGICAL_SEX: &[&str] = &["male", "female"];

/// Numeric request fields in the order they are reported
const NUMERIC_FIELDS: [&str; 4] = ["age", "total_cholesterol", "hdl_cholesterol", "systolic_bp"];

/// Validate biological sex
pub fn validate_biological_sex(sex: &str) -> Result<BiologicalSex, String> {
    sex.parse().map_err(|_| {
        format!(
            "Invalid biological sex. Must be one of: {}",
            VALID_BIOLOGICAL_SEX.join(", ")
        )
    })
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "sex" | "gender" => "Biological Sex",
        "total_cholesterol" => "Total Cholesterol",
        "hdl_cholesterol" => "HDL Cholesterol",
        "systolic_bp" => "Systolic Blood Pressure",
        "smoker" => "Smoker",
        "diabetic" => "Diabetic",
        "bp_treated" => "On Blood Pressure Treatment",
        _ => field_name,
    }
}

fn non_negative(field: &str, value: i32) -> Result<u32, RiskError> {
    u32::try_from(value).map_err(|_| RiskError::invalid(field, "cannot be negative"))
}

impl RiskAssessmentRequest {
    /// Check every field and build validated [`RiskFactors`]
    ///
    /// Reports the first failing field; values are never clamped or coerced.
    pub fn into_factors(self) -> Result<RiskFactors, RiskError> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            for field in NUMERIC_FIELDS {
                if let Some(first) = field_errors.get(field).and_then(|errs| errs.first()) {
                    let message = first
                        .message
                        .as_deref()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("failed {} check", first.code));
                    return Err(RiskError::invalid(field, message));
                }
            }
            return Err(RiskError::invalid("request", errors.to_string()));
        }

        let sex = validate_biological_sex(&self.sex).map_err(|msg| RiskError::invalid("sex", msg))?;

        Ok(RiskFactors {
            age: non_negative("age", self.age)?,
            sex,
            total_cholesterol: non_negative("total_cholesterol", self.total_cholesterol)?,
            hdl_cholesterol: non_negative("hdl_cholesterol", self.hdl_cholesterol)?,
            systolic_bp: non_negative("systolic_bp", self.systolic_bp)?,
            is_smoker: self.smoker,
            is_diabetic: self.diabetic,
            is_on_bp_treatment: self.bp_treated,
        })
    }
}

/// Serialized shape of [`RiskFactors`] before its ranges are checked
#[derive(Debug, Deserialize)]
pub struct UncheckedRiskFactors {
    age: u32,
    sex: BiologicalSex,
    total_cholesterol: u32,
    hdl_cholesterol: u32,
    systolic_bp: u32,
    is_smoker: bool,
    is_diabetic: bool,
    #[serde(default)]
    is_on_bp_treatment: bool,
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl TryFrom<UncheckedRiskFactors> for RiskFactors {
    type Error = RiskError;

    fn try_from(raw: UncheckedRiskFactors) -> Result<Self, Self::Error> {
        RiskAssessmentRequest {
            age: saturating_i32(raw.age),
            sex: raw.sex.as_str().to_string(),
            total_cholesterol: saturating_i32(raw.total_cholesterol),
            hdl_cholesterol: saturating_i32(raw.hdl_cholesterol),
            systolic_bp: saturating_i32(raw.systolic_bp),
            smoker: raw.is_smoker,
            diabetic: raw.is_diabetic,
            bp_treated: raw.is_on_bp_treatment,
        }
        .into_factors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request() -> RiskAssessmentRequest {
        RiskAssessmentRequest {
            age: 55,
            sex: "male".to_string(),
            total_cholesterol: 220,
            hdl_cholesterol: 45,
            systolic_bp: 135,
            smoker: false,
            diabetic: false,
            bp_treated: false,
        }
    }

    #[test]
    fn test_valid_request_builds_factors() {
        let factors = RiskAssessmentRequest {
            smoker: true,
            bp_treated: true,
            ..request()
        }
        .into_factors()
        .unwrap();

        assert_eq!(factors.age, 55);
        assert_eq!(factors.sex, BiologicalSex::Male);
        assert_eq!(factors.hdl_cholesterol, 45);
        assert!(factors.is_smoker);
        assert!(!factors.is_diabetic);
        assert!(factors.is_on_bp_treatment);
    }

    #[test]
    fn test_validate_biological_sex() {
        // Valid
        assert_eq!(validate_biological_sex("male"), Ok(BiologicalSex::Male));
        assert_eq!(validate_biological_sex("female"), Ok(BiologicalSex::Female));

        // Case insensitive
        assert_eq!(validate_biological_sex("MALE"), Ok(BiologicalSex::Male));
        assert_eq!(validate_biological_sex("Female"), Ok(BiologicalSex::Female));

        // Invalid
        assert!(validate_biological_sex("other").is_err());
        assert!(validate_biological_sex("").is_err());
    }

    #[test]
    fn test_unknown_sex_rejected() {
        let err = RiskAssessmentRequest {
            sex: "unknown".to_string(),
            ..request()
        }
        .into_factors()
        .unwrap_err();

        assert_eq!(err.field(), Some("sex"));
    }

    #[test]
    fn test_zero_hdl_rejected() {
        let err = RiskAssessmentRequest {
            hdl_cholesterol: 0,
            ..request()
        }
        .into_factors()
        .unwrap_err();

        assert_eq!(
            err,
            RiskError::invalid("hdl_cholesterol", "must be between 1 and 300 mg/dL")
        );
        assert_eq!(
            err.user_message(),
            "HDL Cholesterol: must be between 1 and 300 mg/dL"
        );
    }

    #[test]
    fn test_negative_values_rejected() {
        let err = RiskAssessmentRequest { age: -1, ..request() }
            .into_factors()
            .unwrap_err();
        assert_eq!(err.field(), Some("age"));

        let err = RiskAssessmentRequest {
            systolic_bp: -120,
            ..request()
        }
        .into_factors()
        .unwrap_err();
        assert_eq!(err.field(), Some("systolic_bp"));
    }

    #[test]
    fn test_first_failing_field_reported() {
        let err = RiskAssessmentRequest {
            age: -5,
            hdl_cholesterol: 0,
            sex: "x".to_string(),
            ..request()
        }
        .into_factors()
        .unwrap_err();

        assert_eq!(err.field(), Some("age"));
    }

    #[test]
    fn test_deserialized_factors_are_range_checked() {
        let valid = serde_json::json!({
            "age": 55,
            "sex": "male",
            "total_cholesterol": 220,
            "hdl_cholesterol": 45,
            "systolic_bp": 135,
            "is_smoker": false,
            "is_diabetic": false
        });
        let factors: RiskFactors = serde_json::from_value(valid.clone()).unwrap();
        assert_eq!(factors, request().into_factors().unwrap());

        let mut zero_hdl = valid.clone();
        zero_hdl["hdl_cholesterol"] = 0.into();
        let err = serde_json::from_value::<RiskFactors>(zero_hdl).unwrap_err();
        assert!(err.to_string().contains("hdl_cholesterol"));

        let mut huge_age = valid;
        huge_age["age"] = u64::from(u32::MAX).into();
        assert!(serde_json::from_value::<RiskFactors>(huge_age).is_err());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("hdl_cholesterol"), "HDL Cholesterol");
        assert_eq!(get_field_display_label("gender"), "Biological Sex");
        assert_eq!(get_field_display_label("systolic_bp"), "Systolic Blood Pressure");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    // Property-based tests
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_age_range(age in 0i32..=130) {
            let req = RiskAssessmentRequest { age, ..request() };
            prop_assert!(req.into_factors().is_ok());
        }

        #[test]
        fn prop_invalid_age_above_max(age in 131i32..1000) {
            let req = RiskAssessmentRequest { age, ..request() };
            prop_assert!(req.into_factors().is_err());
        }

        #[test]
        fn prop_non_positive_hdl_rejected(hdl in -500i32..=0) {
            let err = RiskAssessmentRequest { hdl_cholesterol: hdl, ..request() }
                .into_factors()
                .unwrap_err();
            prop_assert_eq!(err.field(), Some("hdl_cholesterol"));
        }

        #[test]
        fn prop_valid_request_round_trips_values(
            age in 0i32..=130,
            total in 1i32..=1000,
            hdl in 1i32..=300,
            sbp in 1i32..=350,
        ) {
            let factors = RiskAssessmentRequest {
                age,
                total_cholesterol: total,
                hdl_cholesterol: hdl,
                systolic_bp: sbp,
                ..request()
            }
            .into_factors()
            .unwrap();
            prop_assert_eq!(factors.age as i32, age);
            prop_assert_eq!(factors.total_cholesterol as i32, total);
            prop_assert_eq!(factors.hdl_cholesterol as i32, hdl);
            prop_assert_eq!(factors.systolic_bp as i32, sbp);
        }
    }
}
