//! Property-based tests for risk assessment
//!
//! Exercise the service the risk routes call, over the full range of
//! accepted input.

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::services::RiskAssessmentService;
    use cardio_risk_shared::{
        max_risk_percentage, FraminghamPointsModel, RiskAssessmentRequest, RiskCategory,
    };
    use proptest::prelude::*;

    fn arb_sex() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("male".to_string()),
            Just("female".to_string()),
            Just("Male".to_string()),
            Just("FEMALE".to_string()),
        ]
    }

    prop_compose! {
        fn arb_request()(
            age in 0i32..=130,
            sex in arb_sex(),
            total_cholesterol in 1i32..=1000,
            hdl_cholesterol in 1i32..=300,
            systolic_bp in 1i32..=350,
            smoker in any::<bool>(),
            diabetic in any::<bool>(),
            bp_treated in any::<bool>(),
        ) -> RiskAssessmentRequest {
            RiskAssessmentRequest {
                age,
                sex,
                total_cholesterol,
                hdl_cholesterol,
                systolic_bp,
                smoker,
                diabetic,
                bp_treated,
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every in-range request is scored, within the table's bounds
        #[test]
        fn prop_valid_requests_are_scored(req in arb_request()) {
            let response = RiskAssessmentService::assess(&FraminghamPointsModel, req);
            prop_assert!(response.is_ok());

            let response = response.unwrap();
            let ceiling = max_risk_percentage(response.factors.sex);
            prop_assert!(response.result.risk_percentage >= 1);
            prop_assert!(response.result.risk_percentage <= ceiling);
            prop_assert_eq!(response.breakdown.total(), response.result.points_total);
        }

        /// Recommendation count is fixed per category: 5, 7 or 8
        #[test]
        fn prop_recommendation_count_matches_category(req in arb_request()) {
            let response = RiskAssessmentService::assess(&FraminghamPointsModel, req).unwrap();
            let expected = match response.result.risk_category {
                RiskCategory::Low => 5,
                RiskCategory::Moderate => 7,
                RiskCategory::High => 8,
            };
            prop_assert_eq!(response.recommendations.len(), expected);
        }

        /// Non-positive HDL never reaches the scoring model
        #[test]
        fn prop_non_positive_hdl_rejected(req in arb_request(), hdl in -100i32..=0) {
            let req = RiskAssessmentRequest { hdl_cholesterol: hdl, ..req };
            let is_hdl_error = matches!(
                RiskAssessmentService::assess(&FraminghamPointsModel, req),
                Err(ApiError::InvalidField { ref field, .. }) if field == "hdl_cholesterol"
            );
            prop_assert!(is_hdl_error);
        }

        /// Repeated calls give identical results
        #[test]
        fn prop_assessment_is_deterministic(req in arb_request()) {
            let first = RiskAssessmentService::assess(&FraminghamPointsModel, req.clone()).unwrap();
            let second = RiskAssessmentService::assess(&FraminghamPointsModel, req).unwrap();
            prop_assert_eq!(first.result, second.result);
            prop_assert_eq!(first.recommendations, second.recommendations);
        }
    }
}
