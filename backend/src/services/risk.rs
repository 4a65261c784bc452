//! Risk assessment service - validates input and runs the scoring model

use crate::error::ApiError;
use cardio_risk_shared::{assess, RiskAssessmentRequest, RiskAssessmentResponse, RiskModel};
use chrono::Utc;
use metrics::{counter, histogram};
use tracing::{debug, info, warn};

/// Risk assessment service
pub struct RiskAssessmentService;

impl RiskAssessmentService {
    /// Validate a request and produce a full assessment
    ///
    /// Invalid input is rejected before scoring and never coerced.
    pub fn assess(
        model: &dyn RiskModel,
        request: RiskAssessmentRequest,
    ) -> Result<RiskAssessmentResponse, ApiError> {
        debug!(?request, "Received risk assessment request");

        let factors = request.into_factors().map_err(|err| {
            let field = err.field().unwrap_or("request").to_string();
            warn!(field = %field, error = %err, "Rejected risk assessment input");
            counter!("risk_validation_failures_total", "field" => field).increment(1);
            ApiError::from(err)
        })?;

        let assessment = assess(model, factors);

        info!(
            model = %assessment.model,
            sex = %assessment.factors.sex,
            points = assessment.result.points_total,
            risk_percentage = assessment.result.risk_percentage,
            category = %assessment.result.risk_category,
            "Risk assessment completed"
        );
        counter!(
            "risk_assessments_total",
            "category" => assessment.result.risk_category.as_str(),
            "sex" => assessment.factors.sex.as_str()
        )
        .increment(1);
        histogram!("risk_assessment_points").record(f64::from(assessment.result.points_total));

        Ok(RiskAssessmentResponse::from(assessment).at(Utc::now()))
    }
}
